pub mod engines;
pub mod prompts;
pub mod sections;
pub mod summarizer;

pub use engines::{
    ChatMessage, DummyEngine, GenerationEngine, LlamaEngine, ModelTarget, ProbeOutcome, Session,
};
pub use sections::SectionKind;
pub use summarizer::Summarizer;

pub mod prelude {
    pub use crate::engines::{DummyEngine, GenerationEngine, LlamaEngine, Session};
    pub use crate::sections::SectionKind;
    pub use crate::summarizer::Summarizer;
}
