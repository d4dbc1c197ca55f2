pub mod columns;
pub mod decoder;
pub mod normalize;

pub use columns::ColumnMapping;
pub use decoder::{decode_file, JsonWorkbookDecoder, SheetSelection, TabularDecoder};
pub use normalize::{normalize, normalize_row};
