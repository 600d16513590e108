pub mod content;
pub mod escape;
pub mod markup;

pub use content::Content;
pub use escape::{Escaper, XmlEscaper};
pub use markup::Markup;
