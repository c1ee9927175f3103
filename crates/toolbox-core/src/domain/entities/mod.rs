pub mod message_file;
pub mod project;
pub mod remote;

pub use message_file::MessageFile;
pub use project::{Project, ProjectFile, ProjectFilesDefinition, SourceFile, TargetFile};
pub use remote::{ImportLanguage, Namespace, ProjectLanguage};
