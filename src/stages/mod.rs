pub mod stage0_fetch;
pub mod stage1_project;
pub mod stage2_normalize;
pub mod stage3_export;

pub use stage0_fetch::*;
pub use stage1_project::*;
pub use stage2_normalize::*;
pub use stage3_export::*;
