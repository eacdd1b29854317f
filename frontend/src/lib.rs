//! YAG (Your Access Gate) landing site.
//!
//! The state machines live in plain modules ([`site`], [`router`],
//! [`access`], [`notification`], [`mobile_nav`], [`effects`]) and only talk
//! to time through [`scheduler::Scheduler`]. The yew components under
//! `components` and `pages` render that state and feed DOM events back in.

pub mod access;
pub mod app;
pub mod config;
pub mod effects;
pub mod mobile_nav;
pub mod notification;
pub mod router;
pub mod runtime;
pub mod scheduler;
pub mod site;

pub mod components {
    pub mod nav;
    pub mod notification;
    pub mod section;
}

pub mod pages {
    pub mod access;
    pub mod home;
    pub mod sections;
}
