/// Composer adapters for laying out the report document
mod document_definition_composer;
mod markdown_composer;

pub use document_definition_composer::DocumentDefinitionComposer;
pub use markdown_composer::MarkdownComposer;
