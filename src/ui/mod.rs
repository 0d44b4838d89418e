pub mod delegation;
pub mod error_state;
pub mod head;
pub mod motion;
pub mod page_view;
pub mod pages;
pub mod sections;

pub use error_state::ErrorState;
pub use head::PageHead;
pub use page_view::PageView;
pub use sections::SectionView;
