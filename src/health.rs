//! Health recommendations per population group, and the tab strip
//! used to browse them.

use std::collections::BTreeMap;
use std::ops::Range;
use serde::{Deserialize, Serialize};

/// Population groups, in the order their tabs are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    GeneralPopulation,
    Elderly,
    LungDiseasePopulation,
    HeartDiseasePopulation,
    Athletes,
    PregnantWomen,
    Children,
    /// Recommendations personalized for the user.
    Primary,
    Secondary,
}

impl Group {
    pub const ALL: [Group; 9] = [
        Group::GeneralPopulation, Group::Elderly,
        Group::LungDiseasePopulation, Group::HeartDiseasePopulation,
        Group::Athletes, Group::PregnantWomen, Group::Children,
        Group::Primary, Group::Secondary];

    /// Key of the group in API responses.
    pub fn id(self) -> &'static str {
        use Group::*;
        match self {
            GeneralPopulation => "generalPopulation",
            Elderly => "elderly",
            LungDiseasePopulation => "lungDiseasePopulation",
            HeartDiseasePopulation => "heartDiseasePopulation",
            Athletes => "athletes",
            PregnantWomen => "pregnantWomen",
            Children => "children",
            Primary => "primary",
            Secondary => "secondary",
        }
    }

    /// Title of the tab.
    pub fn label(self) -> &'static str {
        use Group::*;
        match self {
            GeneralPopulation => "General Population",
            Elderly => "Elderly",
            LungDiseasePopulation => "Lung Disease",
            HeartDiseasePopulation => "Heart Disease",
            Athletes => "Athletes",
            PregnantWomen => "Pregnant Women",
            Children => "Children",
            Primary => "Personalized",
            Secondary => "Additional",
        }
    }

    pub fn from_id(id: &str) -> Option<Group> {
        Group::ALL.into_iter().find(|g| g.id() == id)
    }
}

/// Recommendation texts keyed by [`Group::id`].  Unknown keys are
/// kept but never shown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recommendations(BTreeMap<String, String>);

impl Recommendations {
    /// Text for `group`, if there is a non-empty one.
    pub fn text(&self, group: Group) -> Option<&str> {
        self.0.get(group.id()).map(String::as_str).filter(|t| !t.is_empty())
    }

    /// Set the text for `group`.
    pub fn insert(&mut self, group: Group, text: impl Into<String>) {
        self.0.insert(group.id().to_string(), text.into());
    }

    /// Groups having a recommendation, in display order.
    pub fn available(&self) -> Vec<Group> {
        Group::ALL.into_iter().filter(|&g| self.text(g).is_some()).collect()
    }

    /// A tab strip over the available groups.
    pub fn carousel(&self) -> Carousel<Group> {
        Carousel::new(self.available())
    }
}

/// Number of tabs shown when the strip is at its start.
const FIRST_PAGE: usize = 4;
/// Number of tabs shown between two chevrons.
const MIDDLE_PAGE: usize = 3;

/// Part of the tab strip on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// Whether a "scroll left" chevron is shown.
    pub left: bool,
    /// Whether a "scroll right" chevron is shown.
    pub right: bool,
    /// Positions of the visible tabs.
    pub tabs: Range<usize>,
}

/// A strip of tabs, only a few of which fit on screen.
///
/// At the start, four tabs are shown followed by a right chevron if
/// more exist.  Once scrolled, a left chevron takes the place of one
/// tab; the strip then shows three tabs between the two chevrons, or
/// the last four tabs when the end is reached.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    tabs: Vec<T>,
    start: usize,
    active: Option<T>,
}

impl<T: Copy + PartialEq> Carousel<T> {
    /// A strip scrolled to its start, with the first tab active.
    pub fn new(tabs: Vec<T>) -> Self {
        let active = tabs.first().copied();
        Carousel { tabs, start: 0, active }
    }

    pub fn len(&self) -> usize { self.tabs.len() }

    pub fn is_empty(&self) -> bool { self.tabs.is_empty() }

    /// Whether the strip is shown at all.  A single tab needs none.
    pub fn has_tab_bar(&self) -> bool { self.tabs.len() > 1 }

    pub fn active(&self) -> Option<T> { self.active }

    /// Make `tab` active.  Returns `false` if it is not in the strip.
    pub fn select(&mut self, tab: T) -> bool {
        if self.tabs.contains(&tab) {
            self.active = Some(tab);
            true
        } else {
            false
        }
    }

    pub fn window(&self) -> Window {
        let n = self.tabs.len();
        if n == 0 {
            return Window { left: false, right: false, tabs: 0 .. 0 }
        }
        if self.start == 0 {
            return Window { left: false, right: n > FIRST_PAGE,
                            tabs: 0 .. n.min(FIRST_PAGE) }
        }
        let first = self.start + 1;
        let end = (first + MIDDLE_PAGE).min(n);
        if end < n {
            Window { left: true, right: true, tabs: first .. end }
        } else {
            Window { left: true, right: false,
                     tabs: n.saturating_sub(FIRST_PAGE) .. n }
        }
    }

    /// The tabs currently on screen.
    pub fn visible(&self) -> &[T] {
        &self.tabs[self.window().tabs]
    }

    /// Move one step left, if the left chevron is shown.
    pub fn scroll_left(&mut self) {
        if self.window().left {
            self.start = self.start.saturating_sub(1);
        }
    }

    /// Move one step right, if the right chevron is shown.
    pub fn scroll_right(&mut self) {
        if self.window().right {
            let max = self.tabs.len().saturating_sub(MIDDLE_PAGE);
            self.start = (self.start + 1).min(max);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn window(left: bool, right: bool, tabs: Range<usize>) -> Window {
        Window { left, right, tabs }
    }

    #[test]
    fn group_ids_round_trip() {
        for g in Group::ALL {
            assert_eq!(Group::from_id(g.id()), Some(g));
        }
        assert_eq!(Group::from_id("pets"), None);
        assert_eq!(Group::Primary.label(), "Personalized");
    }

    #[test]
    fn available_in_display_order() {
        let recs: Recommendations = serde_json::from_value(serde_json::json!({
            "children": "Stay indoors.",
            "athletes": "",
            "elderly": "Avoid exertion.",
            "pets": "Walk briefly."
        })).unwrap();
        assert_eq!(recs.available(), vec![Group::Elderly, Group::Children]);
        assert_eq!(recs.text(Group::Athletes), None);
        let c = recs.carousel();
        assert_eq!(c.active(), Some(Group::Elderly));
        assert!(c.has_tab_bar());
    }

    #[test]
    fn empty_strip() {
        let mut c = Carousel::<Group>::new(vec![]);
        assert_eq!(c.window(), window(false, false, 0 .. 0));
        assert_eq!(c.active(), None);
        c.scroll_right();
        c.scroll_left();
        assert!(c.visible().is_empty());
        assert!(!c.has_tab_bar());
    }

    #[test]
    fn short_strips_do_not_scroll() {
        for n in 1 ..= 4 {
            let mut c = Carousel::new((0 .. n).collect());
            assert_eq!(c.window(), window(false, false, 0 .. n));
            c.scroll_right();
            assert_eq!(c.window(), window(false, false, 0 .. n));
        }
    }

    #[test]
    fn five_tabs() {
        let mut c = Carousel::new((0 .. 5).collect());
        assert_eq!(c.window(), window(false, true, 0 .. 4));
        c.scroll_right();
        assert_eq!(c.window(), window(true, false, 1 .. 5));
        c.scroll_right();
        assert_eq!(c.window(), window(true, false, 1 .. 5));
        c.scroll_left();
        assert_eq!(c.window(), window(false, true, 0 .. 4));
    }

    #[test]
    fn all_groups() {
        let mut recs = Recommendations::default();
        for g in Group::ALL {
            recs.insert(g, format!("about {}", g.label()));
        }
        let mut c = recs.carousel();
        assert_eq!(c.len(), 9);
        assert_eq!(c.window(), window(false, true, 0 .. 4));
        let steps = [window(true, true, 2 .. 5),
                     window(true, true, 3 .. 6),
                     window(true, true, 4 .. 7),
                     window(true, true, 5 .. 8),
                     window(true, false, 5 .. 9)];
        for w in steps {
            c.scroll_right();
            assert_eq!(c.window(), w);
        }
        assert_eq!(c.visible(), &Group::ALL[5 ..]);
        c.scroll_right();
        assert_eq!(c.window(), window(true, false, 5 .. 9));
        c.scroll_left();
        assert_eq!(c.window(), window(true, true, 5 .. 8));
    }

    #[test]
    fn select_only_known_tabs() {
        let mut c = Carousel::new(vec![Group::Elderly, Group::Children]);
        assert!(c.select(Group::Children));
        assert_eq!(c.active(), Some(Group::Children));
        assert!(!c.select(Group::Athletes));
        assert_eq!(c.active(), Some(Group::Children));
    }
}
