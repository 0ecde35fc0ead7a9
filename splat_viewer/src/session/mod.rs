//! Engine session seam
//!
//! Traits the splat engine implements, plus the load request/completion
//! types exchanged across them.

mod load;
mod session;

#[cfg(test)]
pub(crate) mod mock_session;

pub use load::{
    completion_channel, AssetLocator, CompletionSender, LoadCompletion, LoadRequest, LoadTicket,
    SceneFormat,
};
pub use session::{SceneNode, SceneRoot, SessionCamera, ViewerBackend, ViewerSession};
