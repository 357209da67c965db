use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserverEntry};

use crate::config::{
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, STAGGER_LEAD_MS, STAGGER_STEP_MS, STAGGER_TRANSITION,
};
use crate::dom::{self, ClassList, Disposer, InlineStyle};

pub const VISIBLE: &str = "visible";
pub const JS_READY: &str = "js-ready";

const REVEAL_SELECTOR: &str = ".reveal";
const HERO_SELECTOR: &str = ".hero.reveal";
const GROUP_SELECTOR: &str = ".skills-grid, .projects-grid";
const CARD_SELECTOR: &str = ".skill-card, .project-card, .glass-card";

/// Marks every intersecting target visible and hands it to `unobserve`.
/// Non-intersecting entries are ignored. Returns how many targets were revealed.
pub fn reveal_intersecting<T, I, U>(entries: I, mut unobserve: U) -> usize
where
    T: ClassList,
    I: IntoIterator<Item = (T, bool)>,
    U: FnMut(&T),
{
    let mut revealed = 0;
    for (target, intersecting) in entries {
        if !intersecting {
            continue;
        }
        target.add_class(VISIBLE);
        unobserve(&target);
        revealed += 1;
    }
    revealed
}

pub fn reveal_all<T: ClassList>(targets: &[T]) {
    for target in targets {
        target.add_class(VISIBLE);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerStep {
    /// CSS `transition-delay` applied up front.
    pub delay_ms: u32,
    /// When the child's final style is applied.
    pub start_ms: u32,
}

pub fn stagger_schedule(count: usize) -> Vec<StaggerStep> {
    (0..count as u32)
        .map(|i| StaggerStep {
            delay_ms: i * STAGGER_STEP_MS,
            start_ms: STAGGER_LEAD_MS + i * STAGGER_STEP_MS,
        })
        .collect()
}

/// Initial inline styles of a staggered card, before its timer fires.
pub fn hold_back<C: InlineStyle>(child: &C, step: StaggerStep) {
    child.set_style("transition-delay", &format!("{}ms", step.delay_ms));
    child.set_style("opacity", "0");
    child.set_style("transform", "translateY(24px)");
}

pub fn release<C: InlineStyle>(child: &C) {
    child.set_style("transition", STAGGER_TRANSITION);
    child.set_style("opacity", "1");
    child.set_style("transform", "none");
}

/// Staggers the cards of every intersecting group and stops watching that
/// group. `schedule(child, at_ms)` must call [`release`] on `child` after
/// `at_ms`. Returns how many groups were handled.
pub fn stagger_intersecting<G, C, I, K, S, U>(
    entries: I,
    mut children_of: K,
    mut schedule: S,
    mut unobserve: U,
) -> usize
where
    C: InlineStyle,
    I: IntoIterator<Item = (G, bool)>,
    K: FnMut(&G) -> Vec<C>,
    S: FnMut(C, u32),
    U: FnMut(&G),
{
    let mut handled = 0;
    for (group, intersecting) in entries {
        if !intersecting {
            continue;
        }
        let children = children_of(&group);
        let steps = stagger_schedule(children.len());
        for (child, step) in children.into_iter().zip(steps) {
            hold_back(&child, step);
            schedule(child, step.start_ms);
        }
        unobserve(&group);
        handled += 1;
    }
    handled
}

/// Reveals every target when observers are unavailable. Returns whether it did.
pub fn reveal_unless_observable<T: ClassList>(supported: bool, targets: &[T]) -> bool {
    if supported {
        return false;
    }
    reveal_all(targets);
    true
}

/// Body class that lets the stylesheet hide `.reveal` content, plus the hero
/// which is already on screen.
pub fn mark_ready(document: &Document) {
    if let Some(body) = document.body() {
        body.add_class(JS_READY);
    }
    reveal_all(&dom::query_all(document, HERO_SELECTOR));
}

pub fn setup(document: &Document, disposers: &mut Vec<Disposer>) -> Result<(), JsValue> {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    let groups = dom::query_all(document, GROUP_SELECTOR);

    let supported = dom::window_of(document)
        .map(|w| dom::has_intersection_observer(&w))
        .unwrap_or(false);
    if reveal_unless_observable(supported, &targets) {
        debug!("IntersectionObserver unavailable, revealed {} elements", targets.len());
        return Ok(());
    }

    if !targets.is_empty() {
        disposers.push(dom::observe(
            &targets,
            REVEAL_THRESHOLD,
            Some(REVEAL_ROOT_MARGIN),
            |entries, observer| {
                reveal_intersecting(entry_pairs(entries), |target| observer.unobserve(target));
            },
        )?);
    }
    if !groups.is_empty() {
        disposers.push(dom::observe(&groups, REVEAL_THRESHOLD, None, |entries, observer| {
            stagger_intersecting(
                entry_pairs(entries),
                cards_of,
                |child: Element, at| {
                    Timeout::new(at, move || release(&child)).forget();
                },
                |group| observer.unobserve(group),
            );
        })?);
    }
    Ok(())
}

fn entry_pairs(entries: Vec<IntersectionObserverEntry>) -> impl Iterator<Item = (Element, bool)> {
    entries
        .into_iter()
        .map(|entry| (entry.target(), entry.is_intersecting()))
}

fn cards_of(group: &Element) -> Vec<Element> {
    match group.query_selector_all(CARD_SELECTOR) {
        Ok(list) => dom::elements(list),
        Err(e) => {
            debug!("stagger lookup failed: {:?}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;
    use std::cell::RefCell;

    /// Delivers entries only for targets still being watched, like a real observer.
    struct FakeObserver {
        watched: RefCell<Vec<FakeElement>>,
    }

    impl FakeObserver {
        fn watching(elements: &[FakeElement]) -> Self {
            Self { watched: RefCell::new(elements.to_vec()) }
        }

        fn is_watching(&self, el: &FakeElement) -> bool {
            self.watched.borrow().iter().any(|w| w.same(el))
        }

        fn fire(&self, hits: &[(&FakeElement, bool)]) -> usize {
            let entries: Vec<(FakeElement, bool)> = hits
                .iter()
                .filter(|(el, _)| self.is_watching(el))
                .map(|(el, hit)| ((*el).clone(), *hit))
                .collect();
            reveal_intersecting(entries, |target| {
                self.watched.borrow_mut().retain(|w| !w.same(target))
            })
        }
    }

    #[test]
    fn intersecting_elements_become_visible() {
        let elements = vec![FakeElement::with_class("reveal"), FakeElement::with_class("reveal")];
        let observer = FakeObserver::watching(&elements);

        let revealed = observer.fire(&[(&elements[0], true), (&elements[1], false)]);

        assert_eq!(revealed, 1);
        assert!(elements[0].has_class(VISIBLE));
        assert!(!elements[1].has_class(VISIBLE));
        assert!(!observer.is_watching(&elements[0]));
        assert!(observer.is_watching(&elements[1]));
    }

    #[test]
    fn reveal_fires_at_most_once_per_element() {
        let el = FakeElement::with_class("reveal");
        let observer = FakeObserver::watching(&[el.clone()]);

        observer.fire(&[(&el, true)]);
        let writes = el.class_writes.get();
        let again = observer.fire(&[(&el, true)]);

        assert_eq!(again, 0);
        assert_eq!(el.class_writes.get(), writes);
        assert!(el.has_class(VISIBLE));
    }

    #[test]
    fn repeated_reveal_is_idempotent_even_without_unobserve() {
        let el = FakeElement::default();
        reveal_intersecting([(el.clone(), true)], |_| {});
        let writes = el.class_writes.get();
        reveal_intersecting([(el.clone(), true)], |_| {});
        assert_eq!(el.class_writes.get(), writes);
    }

    #[test]
    fn leaving_viewport_never_hides() {
        let el = FakeElement::default();
        reveal_intersecting([(el.clone(), true)], |_| {});
        reveal_intersecting([(el.clone(), false)], |_| {});
        assert!(el.has_class(VISIBLE));
    }

    #[test]
    fn fallback_reveals_everything() {
        let elements = vec![FakeElement::default(), FakeElement::default(), FakeElement::default()];
        reveal_all(&elements);
        assert!(elements.iter().all(|el| el.has_class(VISIBLE)));
    }

    #[test]
    fn without_observer_support_every_target_is_visible() {
        let elements = vec![FakeElement::with_class("reveal"), FakeElement::with_class("reveal")];
        assert!(reveal_unless_observable(false, &elements));
        assert!(elements.iter().all(|el| el.has_class(VISIBLE)));
    }

    #[test]
    fn with_observer_support_targets_wait_for_intersection() {
        let elements = vec![FakeElement::with_class("reveal")];
        assert!(!reveal_unless_observable(true, &elements));
        assert!(!elements[0].has_class(VISIBLE));
    }

    struct Group {
        el: FakeElement,
        cards: Vec<FakeElement>,
    }

    fn group(cards: usize) -> Group {
        Group { el: FakeElement::default(), cards: (0..cards).map(|_| FakeElement::default()).collect() }
    }

    /// Runs one observer callback and returns the timers it scheduled.
    fn fire_groups(
        watched: &RefCell<Vec<FakeElement>>,
        hits: &[(&Group, bool)],
    ) -> Vec<(FakeElement, u32)> {
        let mut timers = Vec::new();
        let entries: Vec<(&Group, bool)> = hits
            .iter()
            .filter(|(g, _)| watched.borrow().iter().any(|w| w.same(&g.el)))
            .copied()
            .collect();
        stagger_intersecting(
            entries,
            |g: &&Group| g.cards.clone(),
            |child, at| timers.push((child, at)),
            |g| watched.borrow_mut().retain(|w| !w.same(&g.el)),
        );
        timers
    }

    #[test]
    fn group_cards_are_held_back_then_released_in_order() {
        let grid = group(3);
        let watched = RefCell::new(vec![grid.el.clone()]);

        let timers = fire_groups(&watched, &[(&grid, true)]);

        let delays: Vec<Option<String>> = grid.cards.iter().map(|c| c.style("transition-delay")).collect();
        assert_eq!(delays, vec![Some("0ms".into()), Some("60ms".into()), Some("120ms".into())]);
        for card in &grid.cards {
            assert_eq!(card.style("opacity").as_deref(), Some("0"));
            assert_eq!(card.style("transform").as_deref(), Some("translateY(24px)"));
        }
        let starts: Vec<u32> = timers.iter().map(|(_, at)| *at).collect();
        assert_eq!(starts, vec![80, 140, 200]);

        for (card, _) in &timers {
            release(card);
        }
        for card in &grid.cards {
            assert_eq!(card.style("opacity").as_deref(), Some("1"));
            assert_eq!(card.style("transform").as_deref(), Some("none"));
            assert_eq!(card.style("transition").as_deref(), Some(STAGGER_TRANSITION));
        }
    }

    #[test]
    fn group_is_staggered_only_on_first_intersection() {
        let grid = group(2);
        let watched = RefCell::new(vec![grid.el.clone()]);

        assert_eq!(fire_groups(&watched, &[(&grid, true)]).len(), 2);
        assert!(watched.borrow().is_empty());
        assert!(fire_groups(&watched, &[(&grid, true)]).is_empty());
    }

    #[test]
    fn non_intersecting_group_is_left_alone() {
        let grid = group(2);
        let watched = RefCell::new(vec![grid.el.clone()]);

        assert!(fire_groups(&watched, &[(&grid, false)]).is_empty());
        assert_eq!(watched.borrow().len(), 1);
        assert!(grid.cards.iter().all(|c| c.style("opacity").is_none()));
    }

    #[test]
    fn stagger_grows_linearly() {
        let schedule = stagger_schedule(3);
        assert_eq!(
            schedule,
            vec![
                StaggerStep { delay_ms: 0, start_ms: 80 },
                StaggerStep { delay_ms: 60, start_ms: 140 },
                StaggerStep { delay_ms: 120, start_ms: 200 },
            ]
        );
        assert!(stagger_schedule(0).is_empty());
    }
}
