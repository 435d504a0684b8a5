//! The six entity schemas and their creation / update inputs.
//!
//! Relational fields hold embedded snapshots: a full copy of the related
//! record as the caller supplied it, frozen at that moment. Nothing here
//! resolves against another collection, so later changes to the related
//! record never show up in earlier embeddings.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, Meta};

// ─── Student ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  #[serde(flatten)]
  pub meta:     Meta,
  pub name:     String,
  pub password: String,
  pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
  pub name:     String,
  pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentPatch {
  pub name:     Option<String>,
  pub password: Option<String>,
  pub subjects: Option<Vec<Subject>>,
}

impl Entity for Student {
  type New = NewStudent;
  type Patch = StudentPatch;

  const NAME: &'static str = "student";
  const COLLECTION: &'static str = "students";

  fn create(meta: Meta, new: NewStudent) -> Self {
    Self {
      meta,
      name: new.name,
      password: new.password,
      subjects: Vec::new(),
    }
  }

  fn merge(&mut self, patch: StudentPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(password) = patch.password {
      self.password = password;
    }
    if let Some(subjects) = patch.subjects {
      self.subjects = subjects;
    }
  }

  fn meta(&self) -> &Meta { &self.meta }

  fn meta_mut(&mut self) -> &mut Meta { &mut self.meta }
}

// ─── Subject ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  #[serde(flatten)]
  pub meta:     Meta,
  pub name:     String,
  pub students: Vec<Student>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubject {
  pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectPatch {
  pub name:     Option<String>,
  /// The only way a subject's roster is ever populated.
  pub students: Option<Vec<Student>>,
}

impl Entity for Subject {
  type New = NewSubject;
  type Patch = SubjectPatch;

  const NAME: &'static str = "subject";
  const COLLECTION: &'static str = "subjects";

  fn create(meta: Meta, new: NewSubject) -> Self {
    Self { meta, name: new.name, students: Vec::new() }
  }

  fn merge(&mut self, patch: SubjectPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(students) = patch.students {
      self.students = students;
    }
  }

  fn meta(&self) -> &Meta { &self.meta }

  fn meta_mut(&mut self) -> &mut Meta { &mut self.meta }
}

// ─── Teacher ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
  #[serde(flatten)]
  pub meta:     Meta,
  pub name:     String,
  pub password: String,
  pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeacher {
  pub name:     String,
  pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeacherPatch {
  pub name:     Option<String>,
  pub password: Option<String>,
  pub subjects: Option<Vec<Subject>>,
}

impl Entity for Teacher {
  type New = NewTeacher;
  type Patch = TeacherPatch;

  const NAME: &'static str = "teacher";
  const COLLECTION: &'static str = "teachers";

  fn create(meta: Meta, new: NewTeacher) -> Self {
    Self {
      meta,
      name: new.name,
      password: new.password,
      subjects: Vec::new(),
    }
  }

  fn merge(&mut self, patch: TeacherPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(password) = patch.password {
      self.password = password;
    }
    if let Some(subjects) = patch.subjects {
      self.subjects = subjects;
    }
  }

  fn meta(&self) -> &Meta { &self.meta }

  fn meta_mut(&mut self) -> &mut Meta { &mut self.meta }
}

// ─── Class ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
  #[serde(flatten)]
  pub meta:     Meta,
  pub name:     String,
  pub students: Vec<Student>,
  pub teacher:  Teacher,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClass {
  pub name:    String,
  pub teacher: Teacher,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassPatch {
  pub name:     Option<String>,
  pub students: Option<Vec<Student>>,
  pub teacher:  Option<Teacher>,
}

impl Entity for Class {
  type New = NewClass;
  type Patch = ClassPatch;

  const NAME: &'static str = "class";
  const COLLECTION: &'static str = "classes";

  fn create(meta: Meta, new: NewClass) -> Self {
    Self {
      meta,
      name: new.name,
      students: Vec::new(),
      teacher: new.teacher,
    }
  }

  fn merge(&mut self, patch: ClassPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(students) = patch.students {
      self.students = students;
    }
    if let Some(teacher) = patch.teacher {
      self.teacher = teacher;
    }
  }

  fn meta(&self) -> &Meta { &self.meta }

  fn meta_mut(&mut self) -> &mut Meta { &mut self.meta }
}

// ─── Assignment ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
  #[serde(flatten)]
  pub meta:         Meta,
  pub name:         String,
  pub subject:      Subject,
  #[serde(rename = "iscompleted")]
  pub is_completed: bool,
  #[serde(rename = "issubmitted")]
  pub is_submitted: bool,
  pub task:         Vec<String>,
}

/// Input to `create` for assignments. The subject is required up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
  pub name:    String,
  pub subject: Subject,
  pub task:    Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentPatch {
  pub name:    Option<String>,
  pub subject: Option<Subject>,
  pub task:    Option<Vec<String>>,
}

impl Entity for Assignment {
  type New = NewAssignment;
  type Patch = AssignmentPatch;

  const NAME: &'static str = "assignment";
  const COLLECTION: &'static str = "assignments";

  fn create(meta: Meta, new: NewAssignment) -> Self {
    Self {
      meta,
      name: new.name,
      subject: new.subject,
      is_completed: false,
      is_submitted: false,
      task: new.task,
    }
  }

  fn merge(&mut self, patch: AssignmentPatch) {
    if let Some(name) = patch.name {
      self.name = name;
    }
    if let Some(subject) = patch.subject {
      self.subject = subject;
    }
    if let Some(task) = patch.task {
      self.task = task;
    }
  }

  fn meta(&self) -> &Meta { &self.meta }

  fn meta_mut(&mut self) -> &mut Meta { &mut self.meta }
}

// ─── Submission ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
  #[serde(flatten)]
  pub meta:         Meta,
  pub assignment:   Assignment,
  pub student:      Student,
  #[serde(rename = "issubmitted")]
  pub is_submitted: bool,
  pub task:         Vec<String>,
}

/// Input to `create` for submissions. Both relations are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubmission {
  pub student:    Student,
  pub assignment: Assignment,
  pub task:       Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionPatch {
  pub student:    Option<Student>,
  pub assignment: Option<Assignment>,
  pub task:       Option<Vec<String>>,
}

impl Entity for Submission {
  type New = NewSubmission;
  type Patch = SubmissionPatch;

  const NAME: &'static str = "submission";
  const COLLECTION: &'static str = "submissions";

  fn create(meta: Meta, new: NewSubmission) -> Self {
    // Creating a submission is the act of submitting.
    Self {
      meta,
      assignment: new.assignment,
      student: new.student,
      is_submitted: true,
      task: new.task,
    }
  }

  fn merge(&mut self, patch: SubmissionPatch) {
    if let Some(student) = patch.student {
      self.student = student;
    }
    if let Some(assignment) = patch.assignment {
      self.assignment = assignment;
    }
    if let Some(task) = patch.task {
      self.task = task;
    }
  }

  fn meta(&self) -> &Meta { &self.meta }

  fn meta_mut(&mut self) -> &mut Meta { &mut self.meta }
}
