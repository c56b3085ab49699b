//! Smooth in-page scrolling under the fixed header, and the header shadow.

use std::rc::Rc;

use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::Context;
use crate::state::scroll::{anchor_target, header_elevated, scroll_top};
use crate::util::dom::{self, Listener, Listeners};
use crate::util::timing::Throttle;

const HEADER_SHADOW: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

/// Intercepts `a[href^="#"]` clicks.
pub struct SmoothScroll {
    _listeners: Listeners,
}

impl SmoothScroll {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let links = dom::document_query_all(&ctx.document, r##"a[href^="#"]"##);
        if links.is_empty() {
            return None;
        }

        let mut listeners = Listeners::new();
        for link in links {
            let ctx = Rc::clone(ctx);
            let anchor = link.clone();
            listeners.keep(Listener::new(&link, "click", move |event: Event| {
                let Some(href) = anchor.get_attribute("href") else {
                    return;
                };
                let Some(id) = anchor_target(&href) else {
                    return;
                };
                let Some(target) = dom::by_id::<HtmlElement>(&ctx.document, id) else {
                    return;
                };
                event.prevent_default();
                let header = dom::by_id::<HtmlElement>(&ctx.document, "header").map_or(0, |h| h.offset_height());
                let options = ScrollToOptions::new();
                options.set_top(scroll_top(f64::from(target.offset_top()), f64::from(header)));
                options.set_behavior(ScrollBehavior::Smooth);
                ctx.window.scroll_to_with_scroll_to_options(&options);
            }));
        }
        Some(Self { _listeners: listeners })
    }
}

/// Elevates `#header` once the page scrolls past the configured offset.
pub struct HeaderShadow {
    _throttle: Rc<Throttle>,
    _listeners: Listeners,
}

impl HeaderShadow {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let header: HtmlElement = dom::by_id(&ctx.document, "header")?;
        let throttle = Rc::new(Throttle::new(ctx.config.scroll_throttle_ms));

        let update: Rc<dyn Fn()> = Rc::new({
            let ctx = Rc::clone(ctx);
            move || {
                let Some(y) = dom::warn_on_err(ctx.window.page_y_offset(), "pageYOffset") else {
                    return;
                };
                let elevated = header_elevated(y, ctx.config.header_shadow_offset_px);
                dom::set_style(&header, "box-shadow", Some(if elevated { HEADER_SHADOW } else { "none" }));
            }
        });
        update();

        let mut listeners = Listeners::new();
        listeners.keep({
            let throttle = Rc::clone(&throttle);
            Listener::passive(&ctx.window, "scroll", move |_: Event| {
                throttle.run(&update);
            })
        });
        Some(Self { _throttle: throttle, _listeners: listeners })
    }
}
