//! Transfer objects and field rules for every entity.

pub mod person;
pub mod user;
pub mod rol;
pub mod user_rol;
pub mod form;
pub mod module;
pub mod form_module;
pub mod rol_form;
pub mod regional;
pub mod center;
pub mod sede;
pub mod program;
pub mod aprendiz;
pub mod instructor;
pub mod enterprise;
pub mod process;
pub mod type_modality;
pub mod state;
pub mod aprendiz_program;
pub mod instructor_program;
pub mod aprendiz_process_instructor;
