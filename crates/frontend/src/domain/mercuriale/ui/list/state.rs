use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct MercurialeListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub search: String,
}

impl Default for MercurialeListState {
    fn default() -> Self {
        Self {
            sort_field: "name".to_string(),
            sort_ascending: true,
            search: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<MercurialeListState> {
    RwSignal::new(MercurialeListState::default())
}
