use business::domain::product::model::Product;
use business::domain::product::value_objects::Category;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() || name.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::new(name))
        }
    }

    fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &product.category == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// Everything the storefront screen depends on.
///
/// `idle -> loading -> (resolved | failed) -> idle`
#[derive(Debug, Clone)]
pub struct StorefrontState {
    category: CategoryFilter,
    preference: String,
    recommended: Option<Vec<Product>>,
    phase: Phase,
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            preference: String::new(),
            recommended: None,
            phase: Phase::Idle,
        }
    }
}

impl StorefrontState {
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn preference(&self) -> &str {
        &self.preference
    }

    pub fn recommended(&self) -> Option<&[Product]> {
        self.recommended.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// "All" followed by the catalog's categories in first-seen order.
    pub fn categories(catalog: &[Product]) -> Vec<String> {
        let mut names = vec![ALL_CATEGORIES.to_string()];
        for product in catalog {
            let name = product.category.to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// The recommendation when there is one, otherwise the filtered catalog.
    pub fn displayed<'a>(&'a self, catalog: &'a [Product]) -> Vec<&'a Product> {
        match &self.recommended {
            Some(products) => products.iter().collect(),
            None => catalog.iter().filter(|p| self.category.admits(p)).collect(),
        }
    }

    /// Category tabs are hidden while a recommendation is on screen.
    pub fn select_category(&mut self, filter: CategoryFilter) -> bool {
        if self.recommended.is_some() {
            return false;
        }
        self.category = filter;
        true
    }

    pub fn set_preference(&mut self, preference: impl Into<String>) {
        self.preference = preference.into();
    }

    /// Enters `Loading` and hands back the trimmed preference to send.
    ///
    /// Returns `None` when the preference is blank or a request is already
    /// in flight; the state is left untouched in that case.
    pub fn begin_request(&mut self) -> Option<String> {
        if self.phase == Phase::Loading {
            return None;
        }
        let preference = self.preference.trim();
        if preference.is_empty() {
            return None;
        }
        let preference = preference.to_string();
        self.phase = Phase::Loading;
        Some(preference)
    }

    /// Applies a server answer. A missing recommendation field changes nothing.
    pub fn resolve(&mut self, recommendations: Option<Vec<Product>>) {
        self.phase = Phase::Idle;
        if let Some(products) = recommendations {
            self.recommended = Some(products);
            self.category = CategoryFilter::All;
        }
    }

    /// Transport failure: back to idle, previous screen kept.
    pub fn fail(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn clear(&mut self) {
        self.recommended = None;
        self.preference.clear();
        self.category = CategoryFilter::All;
    }
}
