//! Portal Guide - Questionnaire-driven module recommendations.
//!
//! This crate implements the captive portal tutorial's guideline
//! questionnaire as a small web service: a fixed decision graph is walked
//! one yes/no answer at a time, and the finished traversal yields a set of
//! downloadable learning modules.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
