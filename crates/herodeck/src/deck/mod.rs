//! The built-in "React Zero to Hero" course.

mod foundations;
mod hooks;
mod state;

use anyhow::Result;

use crate::registry::{SlideDescriptor, SlideRegistry};
use crate::render::RenderUnit;

pub const COURSE_TITLE: &str = "React Zero to Hero";

const COURSE: &[(&str, &str, RenderUnit)] = &[
    ("intro", "React Zero to Hero", foundations::intro),
    ("why-react", "Why React?", foundations::why_react),
    ("jsx", "JSX", foundations::jsx),
    ("components", "Components", foundations::components),
    ("props", "Props", foundations::props),
    ("state", "State with useState", state::use_state),
    ("events", "Handling Events", state::events),
    ("conditional", "Conditional Rendering", state::conditional),
    ("lists", "Lists and Keys", state::lists),
    ("forms", "Controlled Forms", state::forms),
    ("effects", "Side Effects with useEffect", hooks::use_effect),
    ("context", "Context", hooks::context),
    ("refs", "Refs with useRef", hooks::refs),
    ("performance", "Performance", hooks::performance),
    ("custom-hooks", "Custom Hooks", hooks::custom_hooks),
    ("recap", "Recap", hooks::recap),
];

/// Build the course registry.
pub fn registry() -> Result<SlideRegistry<RenderUnit>> {
    let slides = COURSE
        .iter()
        .map(|&(id, title, render)| SlideDescriptor::new(id, title, render))
        .collect();
    let registry = SlideRegistry::new(slides)?;
    for id in registry.duplicate_ids() {
        tracing::warn!(id, "slide id used more than once; navigation goes by position");
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builds() {
        let reg = registry().unwrap();
        assert_eq!(reg.len(), COURSE.len());
        assert_eq!(reg[0].id, "intro");
        assert_eq!(reg[reg.len() - 1].id, "recap");
    }

    #[test]
    fn test_course_ids_are_unique() {
        let reg = registry().unwrap();
        assert!(reg.duplicate_ids().is_empty());
    }

    #[test]
    fn test_course_titles_present() {
        let reg = registry().unwrap();
        assert!(reg.iter().all(|s| !s.title.trim().is_empty()));
        assert_eq!(reg.position_of("state"), Some(5));
    }
}
