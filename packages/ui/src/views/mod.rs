mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod role_selection;
pub use role_selection::{select_role, RoleSelectionView};
