pub mod counter;
pub mod live;
pub mod status;

pub use counter::LengthCounter;
pub use status::FeedbackPresenter;
