use contracts::domain::establishment::EstablishmentPatch;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::establishment::api;
use crate::domain::establishment::context::EstablishmentContext;

/// Editable settings of the active establishment.
#[derive(Clone, Debug, Default)]
pub struct SettingsForm {
    pub name: String,
    pub address: String,
    pub logo_path: Option<String>,
}

/// ViewModel for the establishment settings form
#[derive(Clone, Copy)]
pub struct EstablishmentSettingsVm {
    pub form: RwSignal<SettingsForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub saved: RwSignal<bool>,
}

impl EstablishmentSettingsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(SettingsForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            saved: RwSignal::new(false),
        }
    }

    /// Seed the form from the already-loaded establishment details.
    pub fn load_from(&self, ctx: EstablishmentContext) {
        if let Some(establishment) = ctx.details.get_untracked() {
            self.form.set(SettingsForm {
                name: establishment.name,
                address: establishment.address.unwrap_or_default(),
                logo_path: establishment.logo_path,
            });
        }
    }

    fn validate(form: &SettingsForm) -> Result<(), &'static str> {
        if form.name.trim().len() < 2 {
            return Err("Establishment name must be at least 2 characters");
        }
        Ok(())
    }

    /// Upload a logo file, storing the resulting path in the form.
    pub fn upload_logo_command(&self, ctx: EstablishmentContext, file: web_sys::File) {
        let Some(id) = ctx.active_id.get_untracked() else {
            return;
        };
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match api::upload_logo(&id, file).await {
                Ok(path) => form.update(|f| f.logo_path = Some(path)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    /// Persist the form and refresh the establishment context.
    pub fn save_command(&self, ctx: EstablishmentContext) {
        let current = self.form.get();

        if let Err(msg) = Self::validate(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }
        let Some(id) = ctx.active_id.get_untracked() else {
            return;
        };

        let patch = EstablishmentPatch {
            name: Some(current.name.trim().to_string()),
            address: if current.address.trim().is_empty() {
                None
            } else {
                Some(current.address.trim().to_string())
            },
            logo_path: current.logo_path.clone(),
        };

        let error = self.error;
        let saving = self.saving;
        let saved = self.saved;
        saving.set(true);
        saved.set(false);

        spawn_local(async move {
            match api::update_establishment(&id, &patch).await {
                Ok(()) => {
                    saved.set(true);
                    error.set(None);
                    ctx.refresh();
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}
