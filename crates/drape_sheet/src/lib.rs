//! Drape Sheet
//!
//! Gesture-driven modal sheet. A [`SheetController`] hosts one piece of
//! [`SheetContent`], slides it in from a screen edge, and moves it between
//! three resting states in response to drags:
//!
//! - `Minimised`: off-screen
//! - `Collapsed`: resting at the collapsed height
//! - `Expanded`: resting at the expanded height
//!
//! The host toolkit plugs in through [`SheetHost`] (layout, animation,
//! modal dismissal) and is told about lifecycle milestones through an
//! optional [`SheetDelegate`].
//!
//! # Example
//!
//! ```
//! use drape_core::{Rect, SheetState};
//! use drape_sheet::{AnimationRequest, PlainContent, SheetController, SheetHost, SheetLayout, TransitionSpec, ViewHandle};
//!
//! #[derive(Default)]
//! struct Host {
//!     requests: Vec<AnimationRequest>,
//! }
//!
//! impl SheetHost for Host {
//!     fn apply_layout(&mut self, _layout: &SheetLayout) {}
//!     fn run_animation(&mut self, request: AnimationRequest) {
//!         self.requests.push(request);
//!     }
//!     fn dismiss(&mut self, _transition: &TransitionSpec) {}
//! }
//!
//! let content = PlainContent { view: ViewHandle(1) };
//! let mut sheet = SheetController::new(content, Host::default());
//!
//! sheet.view_will_appear(Rect::new(0.0, 0.0, 400.0, 800.0));
//! sheet.view_did_appear();
//!
//! assert_eq!(sheet.state(), SheetState::Collapsed);
//! assert_eq!(sheet.content_frame(), Rect::new(0.0, 400.0, 400.0, 400.0));
//! ```

pub mod animator;
pub mod config;
pub mod content;
pub mod controller;
pub mod delegate;
pub mod host;
pub mod keyboard;
pub mod layout;
pub mod scroll;
pub mod transition;

pub use animator::{
    animator_for, AnimatorKind, AnimatorSettings, BottomSheetAnimator, PopUpHorizontalAnimator,
    PopUpVerticalAnimator, PresentationAnimator, PresentationPort, ReleasePlan,
};
pub use config::{PresentationStyle, SettleConfig, SheetConfig};
pub use content::{
    NavigationItem, PlainContent, SheetContent, SheetContext, StatusBarAnimation, StatusBarStyle, ViewHandle,
};
pub use controller::{ParentKind, SheetController};
pub use delegate::SheetDelegate;
pub use host::{AnimationId, AnimationPurpose, AnimationRequest, SheetHost};
pub use keyboard::{KeyboardAvoidance, DEFAULT_KEYBOARD_HEIGHT};
pub use layout::{SheetLayout, HEADER_MIN_HEIGHT};
pub use scroll::{ScrollCoordinator, ScrollRegion, ScrollViewState, SharedScrollRegion};
pub use transition::{TransitionPhase, TransitionSpec, DEFAULT_TRANSITION_DURATION};
