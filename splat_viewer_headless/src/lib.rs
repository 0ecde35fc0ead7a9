/*!
# Splat Viewer - Headless Backend

In-memory engine implementing the `splat_viewer` session traits.

No window, no GPU and no network: the scene graph is a SlotMap of
scripted nodes, the camera keeps the same state a real splat viewer's
camera does, and loads stay pending until the caller resolves or fails
them. Used by the core crate's integration tests and by the demo binary.
*/

mod headless_camera;
mod headless_scene;
mod headless_session;

pub use headless_camera::HeadlessCamera;
pub use headless_scene::{HeadlessNode, HeadlessScene, NodeGeometry, NodeKey};
pub use headless_session::{HeadlessBackend, HeadlessSession};
