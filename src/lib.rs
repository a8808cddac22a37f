// SPDX-License-Identifier: MPL-2.0
//! `pill_tabs` provides a segmented tab control for the Iced GUI framework:
//! a rounded bar of icon tabs with a spring-animated "pill" indicator sliding
//! beneath the selected icon.
//!
//! The control lives in [`ui::segmented_control`]. The [`app`] module is a
//! small demo host that loads its look from [`config`].

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
