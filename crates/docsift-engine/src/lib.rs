pub mod catalog;
pub mod collect;
pub mod convert;
pub mod dictionary;
pub mod locate;
pub mod markup;
pub mod normalize;
pub mod observer;
pub mod orchestrator;
pub mod record;
pub mod result;
pub mod scan;
pub mod section;
pub mod table;

// Re-export key types for easier usage
pub use catalog::Catalog;
pub use convert::{AutoConverter, ConvertError, ConverterKind, DocumentConverter, DocxConverter, HtmlConverter};
pub use dictionary::LabelDictionary;
pub use markup::{BlockId, BlockKind, MarkupBlock, MarkupTree, TreeBuilder};
pub use observer::{LogObserver, NullObserver, ParseObserver};
pub use orchestrator::{ParseState, SectionParser};
pub use record::SectionRecord;
pub use result::{Mode, ParseIssue, ParseResult, Payload, Row};
pub use section::{SectionKind, SectionSpec, ThresholdOverrides, Thresholds};
