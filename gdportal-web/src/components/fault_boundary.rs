//! Top-level render-fault boundary.
//!
//! The boundary calls its `render` callback during its own view pass. An `Err`
//! (or, on unwinding targets, a panic) replaces the whole subtree with the
//! recovery page until the page is reloaded. The routed views are plain
//! functions evaluated inside that callback. Event handlers, the stateful
//! header and router links render or run outside it, and the game frame is
//! never observed.
use crate::pages::recovery::RecoveryPage;
use gdportal_core::fault::{self, RenderFault};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub render: Callback<(), Result<Html, RenderFault>>,
    /// Replaces the default full-page reload.
    #[prop_or_default]
    pub on_reboot: Option<Callback<()>>,
}

pub enum Msg {
    Captured(RenderFault),
    Reboot,
}

pub struct FaultBoundary {
    state: fault::FaultBoundary,
}

impl FaultBoundary {
    fn recovery(ctx: &Context<Self>, description: &str) -> Html {
        let on_reboot = ctx.link().callback(|()| Msg::Reboot);
        html! {
            <RecoveryPage description={AttrValue::from(description.to_string())} {on_reboot} />
        }
    }
}

impl Component for FaultBoundary {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: fault::FaultBoundary::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Captured(fault) => self.state.capture(&fault),
            Msg::Reboot => {
                match &ctx.props().on_reboot {
                    Some(cb) => cb.emit(()),
                    None => crate::dom::reload_page(),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Some(description) = self.state.description() {
            return Self::recovery(ctx, description);
        }

        let render = ctx.props().render.clone();
        match fault::attempt(|| render.emit(())) {
            Ok(html) => html,
            Err(fault) => {
                log::error!("Uncaught render fault: {fault} ({fault:?})");
                let description = fault.to_string();
                ctx.link().send_message(Msg::Captured(fault));
                Self::recovery(ctx, &description)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use gdportal_core::CatalogError;
    use yew::LocalServerRenderer;

    fn render_with(render: Callback<(), Result<Html, RenderFault>>) -> String {
        let props = Props {
            render,
            on_reboot: Some(Callback::noop()),
        };
        block_on(LocalServerRenderer::<FaultBoundary>::with_props(props).render())
    }

    #[test]
    fn transparent_while_ok() {
        let html = render_with(Callback::from(|()| {
            Ok(html! { <p class="child">{ "all good" }</p> })
        }));
        assert!(html.contains("all good"));
        assert!(!html.contains("CRITICAL ERROR"));
    }

    #[test]
    fn error_swaps_in_recovery_view_with_message() {
        let html = render_with(Callback::from(|()| {
            Err(RenderFault::from(CatalogError::DuplicateId(
                "geometry-dash".to_string(),
            )))
        }));
        assert!(html.contains("CRITICAL ERROR"));
        assert!(html.contains("REBOOT SYSTEM"));
        assert!(html.contains("geometry-dash"));
        assert!(!html.contains("all good"));
    }

    #[test]
    fn panic_swaps_in_recovery_view() {
        let html = render_with(Callback::from(|()| -> Result<Html, RenderFault> {
            panic!("frame host exploded")
        }));
        assert!(html.contains("CRITICAL ERROR"));
        assert!(html.contains("render panicked: frame host exploded"));
    }
}
