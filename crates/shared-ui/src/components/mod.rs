// Form controls used by the signup form
pub mod button;
pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

pub use button::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use textarea::*;
