//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services: JSON in and
//! out, query validation, and translation of domain errors to status codes.

pub mod rest;
