// ============================================================================
// NOTIFICATION DISMISS - Marcar como leída y mostrar el contenido completo
// ============================================================================
// Markup preferido: el control declara qué mostrar y qué ocultar
//
//   <li data-notification>
//     <a class="show-notification" data-href="/notification/read/3"
//        data-conceal=".preview" data-reveal=".body">…</a>
//     <span class="preview">…</span>
//     <div class="body hidden">…</div>
//   </li>
//
// Sin data-conceal/data-reveal se usa el markup antiguo: el hermano siguiente
// se oculta y el segundo hermano se muestra.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom;
use crate::models::ToastCategory;
use crate::services::{mark_read, ApiClient};
use crate::utils::HIDDEN_CLASS;
use crate::viewmodels::{NotificationPoller, ToastPresenter};

/// Cómo encontrar un elemento relativo al control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetLookup {
    Selector(String),
    /// N-ésimo hermano siguiente (1 = inmediato)
    Sibling(usize),
}

impl TargetLookup {
    pub fn from_attr(attr: Option<String>, legacy_offset: usize) -> Self {
        match attr {
            Some(selector) if !selector.trim().is_empty() => TargetLookup::Selector(selector),
            _ => TargetLookup::Sibling(legacy_offset),
        }
    }

    pub fn resolve<N: NotificationNode>(&self, control: &N) -> Option<N> {
        match self {
            TargetLookup::Selector(selector) => match control.notification_scope() {
                Some(scope) => scope.select_within(selector),
                None => control.select_in_document(selector),
            },
            TargetLookup::Sibling(offset) => {
                let mut current = control.clone();
                for _ in 0..*offset {
                    current = current.next_element()?;
                }
                Some(current)
            }
        }
    }
}

/// Navegación mínima que necesita TargetLookup
pub trait NotificationNode: Clone {
    fn next_element(&self) -> Option<Self>;
    /// Contenedor `[data-notification]` más cercano
    fn notification_scope(&self) -> Option<Self>;
    fn select_within(&self, selector: &str) -> Option<Self>;
    fn select_in_document(&self, selector: &str) -> Option<Self>;
}

impl NotificationNode for Element {
    fn next_element(&self) -> Option<Self> {
        self.next_element_sibling()
    }

    fn notification_scope(&self) -> Option<Self> {
        self.closest("[data-notification]").ok().flatten()
    }

    fn select_within(&self, selector: &str) -> Option<Self> {
        dom::query_within(self, selector)
    }

    fn select_in_document(&self, selector: &str) -> Option<Self> {
        dom::query_selector(selector).ok().flatten()
    }
}

#[derive(Clone)]
pub struct DismissContext {
    pub client: ApiClient,
    pub toast: ToastPresenter,
    pub poller: Option<NotificationPoller>,
}

pub fn bind_dismiss_controls(selector: &str, ctx: DismissContext) -> Result<usize, JsValue> {
    let controls = dom::query_selector_all(selector)?;
    let count = controls.len();
    for control in controls {
        let ctx = ctx.clone();
        let source = control.clone();
        dom::on_click(&control, move |_| {
            if let Err(e) = dismiss(&source, &ctx) {
                log::error!("❌ Error marcando notificación: {:?}", e);
            }
        })?;
    }
    Ok(count)
}

fn dismiss(control: &Element, ctx: &DismissContext) -> Result<(), JsValue> {
    let reveal = TargetLookup::from_attr(dom::data_attr(control, "reveal"), 2);
    let conceal = TargetLookup::from_attr(dom::data_attr(control, "conceal"), 1);

    if let Some(element) = reveal.resolve(control) {
        dom::remove_class(&element, HIDDEN_CLASS)?;
    }
    if let Some(element) = conceal.resolve(control) {
        dom::add_class(&element, HIDDEN_CLASS)?;
    }
    dom::add_class(control, HIDDEN_CLASS)?;

    let Some(url) = dom::data_attr(control, "href") else {
        log::warn!("⚠️ Control de notificación sin data-href");
        return Ok(());
    };

    let ctx = ctx.clone();
    spawn_local(async move {
        if let Ok(response) = mark_read(&ctx.client, &url).await {
            if let Some(poller) = &ctx.poller {
                poller.refresh();
            }
            ctx.toast.show(&response.message, ToastCategory::Info);
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn explicit_selectors_win_over_siblings() {
        assert_eq!(
            TargetLookup::from_attr(Some(".body".into()), 2),
            TargetLookup::Selector(".body".into())
        );
    }

    /// Árbol en memoria: cada nodo tiene clases, hermano siguiente y contenedor
    #[derive(Clone, Debug, PartialEq)]
    struct FakeNode {
        tree: Rc<Vec<FakeData>>,
        index: usize,
    }

    #[derive(Debug, PartialEq)]
    struct FakeData {
        class: &'static str,
        next: Option<usize>,
        scope: Option<usize>,
    }

    impl FakeNode {
        fn class(&self) -> &'static str {
            self.tree[self.index].class
        }

        fn at(&self, index: usize) -> Self {
            FakeNode {
                tree: self.tree.clone(),
                index,
            }
        }

        fn find(&self, selector: &str, scope: Option<usize>) -> Option<Self> {
            let class = selector.trim_start_matches('.');
            self.tree
                .iter()
                .enumerate()
                .find(|(_, data)| data.class == class && (scope.is_none() || data.scope == scope))
                .map(|(i, _)| self.at(i))
        }
    }

    impl NotificationNode for FakeNode {
        fn next_element(&self) -> Option<Self> {
            self.tree[self.index].next.map(|i| self.at(i))
        }

        fn notification_scope(&self) -> Option<Self> {
            self.tree[self.index].scope.map(|i| self.at(i))
        }

        fn select_within(&self, selector: &str) -> Option<Self> {
            self.find(selector, Some(self.index))
        }

        fn select_in_document(&self, selector: &str) -> Option<Self> {
            self.find(selector, None)
        }
    }

    fn node(class: &'static str, next: Option<usize>, scope: Option<usize>) -> FakeData {
        FakeData { class, next, scope }
    }

    /// Dos notificaciones con el mismo markup; el control está en la segunda
    fn two_notifications() -> FakeNode {
        let tree = Rc::new(vec![
            node("notification", None, None),                 // 0
            node("preview", Some(2), Some(0)),                // 1
            node("body", None, Some(0)),                      // 2
            node("notification", None, None),                 // 3
            node("show-notification", Some(5), Some(3)),      // 4
            node("preview", Some(6), Some(3)),                // 5
            node("body", None, Some(3)),                      // 6
        ]);
        FakeNode { tree, index: 4 }
    }

    #[test]
    fn legacy_markup_conceals_next_and_reveals_second_sibling() {
        let control = two_notifications();
        let conceal = TargetLookup::from_attr(None, 1).resolve(&control).unwrap();
        let reveal = TargetLookup::from_attr(None, 2).resolve(&control).unwrap();
        assert_eq!((conceal.index, conceal.class()), (5, "preview"));
        assert_eq!((reveal.index, reveal.class()), (6, "body"));
    }

    #[test]
    fn selectors_resolve_inside_own_notification() {
        let control = two_notifications();
        let reveal = TargetLookup::Selector(".body".into()).resolve(&control).unwrap();
        // No el `.body` de la primera notificación
        assert_eq!(reveal.index, 6);
    }

    #[test]
    fn selectors_without_container_search_the_document() {
        let tree = Rc::new(vec![
            node("show-notification", None, None),
            node("body", None, Some(9)),
        ]);
        let control = FakeNode { tree, index: 0 };
        let reveal = TargetLookup::Selector(".body".into()).resolve(&control).unwrap();
        assert_eq!(reveal.index, 1);
    }

    #[test]
    fn missing_siblings_resolve_to_nothing() {
        let tree = Rc::new(vec![node("show-notification", Some(1), None), node("preview", None, None)]);
        let control = FakeNode { tree, index: 0 };
        assert!(TargetLookup::Sibling(1).resolve(&control).is_some());
        assert_eq!(TargetLookup::Sibling(2).resolve(&control), None);
    }

    #[test]
    fn missing_or_blank_attribute_uses_legacy_sibling() {
        assert_eq!(TargetLookup::from_attr(None, 2), TargetLookup::Sibling(2));
        assert_eq!(TargetLookup::from_attr(Some("  ".into()), 1), TargetLookup::Sibling(1));
    }
}
