//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state and the keyboard event loop
//! - **[`screen`]**: the [`Surface`] implementation the session renders into
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`SessionController`] over a [`Screen`] and call [`App::run`].
//!
//! [`Surface`]: crate::drill::Surface
//! [`SessionController`]: crate::drill::SessionController
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod screen;
pub mod theme;

pub use app::App;
pub use screen::Screen;
