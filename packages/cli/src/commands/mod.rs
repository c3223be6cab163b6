pub mod convert;
pub mod fmt;
pub mod init;
pub mod move_node;
pub mod preview;

pub use convert::{convert, import_classes, import_style, ConvertArgs, ImportClassesArgs, ImportStyleArgs};
pub use fmt::{fmt, FmtArgs};
pub use init::{init, InitArgs};
pub use move_node::{move_node, MoveArgs};
pub use preview::{preview, PreviewArgs};
