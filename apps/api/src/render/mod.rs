// Résumé rendering: lenient payload reading, HTML escaping and the document template.
// Rendering is pure and never fails; problems surface only as field warnings.

pub mod escape;
pub mod handlers;
pub mod html;
pub mod record;
