//! Helpers shared by the integration tests.

#![allow(dead_code)]

use maplestat::ui::CharacterView;
use maplestat::DisplaySurface;
use std::sync::Mutex;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Loading,
    LoadingHidden,
    Error(String),
    Result(CharacterView),
}

/// A display surface that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<Shown>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<Shown> {
        self.events.lock().unwrap().clone()
    }

    pub fn results(&self) -> Vec<CharacterView> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Shown::Result(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Shown::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Whether the loading indicator is currently shown.
    pub fn loading_visible(&self) -> bool {
        self.events().iter().fold(false, |visible, event| match event {
            Shown::Loading => true,
            Shown::LoadingHidden => false,
            _ => visible,
        })
    }

    fn push(&self, event: Shown) {
        self.events.lock().unwrap().push(event);
    }
}

impl DisplaySurface for RecordingSurface {
    fn show_loading(&self) {
        self.push(Shown::Loading);
    }

    fn hide_loading(&self) {
        self.push(Shown::LoadingHidden);
    }

    fn show_error(&self, message: &str) {
        self.push(Shown::Error(message.to_string()));
    }

    fn show_result(&self, view: &CharacterView) {
        self.push(Shown::Result(view.clone()));
    }
}
