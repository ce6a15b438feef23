// ============================================================================
// spark-hydrate - Reactive Collections
// Ordered lists with edit-script notification and whole-value maps
// ============================================================================
//
// `List` reports every structural change as an `Edit` (insert/remove at an
// index) so a DOM patcher can mirror it, plus a full-sequence callback for
// simpler consumers. `Map` only reports the whole map.
// ============================================================================

mod list;
mod map;

pub use list::{list, ChangeSubscriber, EditSubscriber, List};
pub use map::{Map, MapSubscriber};
