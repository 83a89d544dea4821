// ============================================================================
// MODAL BINDER - action del formulario según el disparador del modal
// ============================================================================

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

/// Par modal → formulario; cada par es independiente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalBinding {
    pub modal_id: &'static str,
    pub form_selector: &'static str,
}

pub const MODAL_BINDINGS: [ModalBinding; 2] = [
    // Confirmación de borrado
    ModalBinding {
        modal_id: "confirm-delete",
        form_selector: ".delete-form",
    },
    // Migración
    ModalBinding {
        modal_id: "migrate_form",
        form_selector: ".migrate_form",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAction {
    pub form_selector: &'static str,
    pub action: String,
}

impl ModalBinding {
    /// Disparadores declarados en el markup (Bootstrap 3/4 y 5)
    pub fn trigger_selector(&self) -> String {
        format!(
            "[data-target='#{id}'], [data-bs-target='#{id}']",
            id = self.modal_id
        )
    }

    /// Devuelve false si la página no contiene este modal
    pub fn bind(self) -> Result<bool, JsValue> {
        let Some(modal) = dom::get_element_by_id(self.modal_id) else {
            return Ok(false);
        };

        // Bootstrap 5 emite `show.bs.modal` nativo con `relatedTarget`
        dom::on_event(&modal, "show.bs.modal", move |event| {
            let related = Reflect::get(&event, &JsValue::from_str("relatedTarget"))
                .ok()
                .and_then(|value| value.dyn_into::<Element>().ok());
            if let Some(trigger) = related {
                self.copy_action(&trigger);
            }
        })?;

        // El click llega antes de que el modal se muestre, con cualquier versión
        for trigger in dom::query_selector_all(&self.trigger_selector())? {
            let source = trigger.clone();
            dom::on_click(&trigger, move |_| self.copy_action(&source))?;
        }

        log::debug!("🪟 Modal #{} enlazado a {}", self.modal_id, self.form_selector);
        Ok(true)
    }

    /// `action` que recibe el formulario del modal; sin `data-href` no se toca
    pub fn form_action(&self, trigger_href: Option<String>) -> Option<FormAction> {
        let action = trigger_href.filter(|href| !href.trim().is_empty())?;
        Some(FormAction {
            form_selector: self.form_selector,
            action,
        })
    }

    fn copy_action(&self, trigger: &Element) {
        let Some(FormAction { form_selector, action }) =
            self.form_action(dom::data_attr(trigger, "href"))
        else {
            return;
        };
        let forms = match dom::query_selector_all(form_selector) {
            Ok(forms) => forms,
            Err(e) => {
                log::error!("❌ Error buscando {}: {:?}", form_selector, e);
                return;
            }
        };
        for form in forms {
            if let Err(e) = form.set_attribute("action", &action) {
                log::error!("❌ Error asignando action: {:?}", e);
            }
        }
    }
}

/// Enlaza los dos modales de la página; devuelve cuántos existían
pub fn bind_modals() -> Result<usize, JsValue> {
    let mut bound = 0;
    for binding in MODAL_BINDINGS {
        if binding.bind()? {
            bound += 1;
        }
    }
    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_selector_covers_both_bootstrap_attributes() {
        assert_eq!(
            MODAL_BINDINGS[0].trigger_selector(),
            "[data-target='#confirm-delete'], [data-bs-target='#confirm-delete']"
        );
    }

    #[test]
    fn delete_trigger_href_becomes_delete_form_action() {
        assert_eq!(
            MODAL_BINDINGS[0].form_action(Some("/posts/7".to_string())),
            Some(FormAction {
                form_selector: ".delete-form",
                action: "/posts/7".to_string(),
            })
        );
    }

    #[test]
    fn migrate_binding_targets_only_its_own_form() {
        let action = MODAL_BINDINGS[1].form_action(Some("/posts/7/migrate".to_string()));
        assert_eq!(action.map(|a| a.form_selector), Some(".migrate_form"));
    }

    #[test]
    fn trigger_without_href_leaves_form_untouched() {
        assert_eq!(MODAL_BINDINGS[0].form_action(None), None);
        assert_eq!(MODAL_BINDINGS[0].form_action(Some(" ".to_string())), None);
    }

    #[test]
    fn bindings_are_distinct() {
        assert_ne!(MODAL_BINDINGS[0].modal_id, MODAL_BINDINGS[1].modal_id);
        assert_ne!(MODAL_BINDINGS[0].form_selector, MODAL_BINDINGS[1].form_selector);
    }
}
