#![forbid(unsafe_code)]

//! Browser frontend for cardshelf.
//!
//! Binds the host traits of [`cardshelf_core`] to the page DOM and boots on
//! module start: every grid container found on the page gets a
//! [`DatasetController`](cardshelf_core::DatasetController), a live search
//! listener when its input exists, and an asynchronous load. Image grids route
//! click and keyboard activation to the page's single lightbox.
//!
//! Only compiled on `wasm32`; native builds see an empty crate and test the
//! pipeline through `cardshelf_core::headless` instead.

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod lightbox;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{boot, boot_page};
