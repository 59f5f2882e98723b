pub mod check;
pub mod compare;
pub mod gpa;
pub mod grades;
pub mod init;
pub mod project;
pub mod validate;
