//! SpaceX launch records dashboard.
//!
//! A launch-site dropdown and a payload range slider drive two charts: a pie
//! of launches (per site, or success/failure at one site) and a payload vs.
//! outcome scatter. The same controller feeds an HTTP surface ([`web`]) and a
//! native egui window ([`app`]).

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
pub mod web;
