pub mod codec;
pub mod correction;
pub mod feed;
pub mod metrics;
pub mod status;
pub mod view;
