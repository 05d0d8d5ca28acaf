// Task-Modul: Enthält alle Embassy Tasks
//
// Nur ein Task: die Regenbogen-Animation. Das Display wird
// einmalig in main() beschrieben.

pub mod rainbow;

// Re-export Tasks für einfachen Import
pub use rainbow::rainbow_task;
