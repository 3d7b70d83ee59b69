//! Symbol lookup for expressions
//!
//! Expressions reference parameters by their `parameterId`. A finder answers which parameters are
//! visible in a scope and what their values are.

use itertools::Itertools;

use crate::model::{Named, Parameter};

/// Resolves parameter identifiers of a single scope
pub trait ParameterFinder {
    fn has_id(&self, id: &str) -> bool;

    /// Returns the value expression of the parameter `id`
    fn value_for_id(&self, id: &str) -> Option<String>;

    fn name_for_id(&self, id: &str) -> Option<String>;

    fn all_parameter_ids(&self) -> Vec<String>;
}

/// Finder over a plain list of parameters
#[derive(Clone, Copy)]
pub struct ListParameterFinder<'a> {
    parameters: &'a [Parameter],
}

impl<'a> ListParameterFinder<'a> {
    pub fn new(parameters: &'a [Parameter]) -> Self {
        Self { parameters }
    }

    fn find(&self, id: &str) -> Option<&'a Parameter> {
        if id.is_empty() {
            return None;
        }
        self.parameters.iter().find(|p| p.parameter_id == id)
    }
}

impl<'a> ParameterFinder for ListParameterFinder<'a> {
    fn has_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    fn value_for_id(&self, id: &str) -> Option<String> {
        self.find(id).map(|p| p.value.clone())
    }

    fn name_for_id(&self, id: &str) -> Option<String> {
        self.find(id).map(|p| p.name().to_owned())
    }

    fn all_parameter_ids(&self) -> Vec<String> {
        self.parameters
            .iter()
            .filter(|p| !p.parameter_id.is_empty())
            .map(|p| p.parameter_id.clone())
            .collect()
    }
}

/// Ordered list of finders; the first finder knowing an identifier answers for it
#[derive(Default)]
pub struct MultipleParameterFinder<'a> {
    finders: Vec<Box<dyn ParameterFinder + 'a>>,
}

impl<'a> MultipleParameterFinder<'a> {
    pub fn new() -> Self {
        Self { finders: vec![] }
    }

    pub fn add_finder(&mut self, finder: impl ParameterFinder + 'a) {
        self.finders.push(Box::new(finder));
    }

    pub fn with_finder(mut self, finder: impl ParameterFinder + 'a) -> Self {
        self.add_finder(finder);
        self
    }

    fn finder_for(&self, id: &str) -> Option<&(dyn ParameterFinder + 'a)> {
        self.finders
            .iter()
            .find(|finder| finder.has_id(id))
            .map(|finder| &**finder)
    }
}

impl<'a> ParameterFinder for MultipleParameterFinder<'a> {
    fn has_id(&self, id: &str) -> bool {
        self.finder_for(id).is_some()
    }

    fn value_for_id(&self, id: &str) -> Option<String> {
        self.finder_for(id)?.value_for_id(id)
    }

    fn name_for_id(&self, id: &str) -> Option<String> {
        self.finder_for(id)?.name_for_id(id)
    }

    fn all_parameter_ids(&self) -> Vec<String> {
        self.finders
            .iter()
            .flat_map(|finder| finder.all_parameter_ids())
            .unique()
            .collect()
    }
}

/// `ipxact:configurableElementValue`: overrides the value of a parameter for one instance
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigurableElementValue {
    pub reference_id: String,
    pub value: String,
}

impl ConfigurableElementValue {
    pub fn new(reference_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
            value: value.into(),
        }
    }
}

/// Finder for one instance in a design
///
/// Values given for the instance take precedence over the parameters of the instantiated
/// element. Names always come from the instantiated element.
pub struct DesignParameterFinder<'a> {
    overrides: Vec<ConfigurableElementValue>,
    base: Box<dyn ParameterFinder + 'a>,
}

impl<'a> DesignParameterFinder<'a> {
    pub fn new(base: impl ParameterFinder + 'a) -> Self {
        Self {
            overrides: vec![],
            base: Box::new(base),
        }
    }

    /// Replace the configurable element values of the current instance
    pub fn set_configurable_element_values(&mut self, values: Vec<ConfigurableElementValue>) {
        self.overrides = values;
    }

    fn override_for(&self, id: &str) -> Option<&ConfigurableElementValue> {
        self.overrides.iter().find(|cev| cev.reference_id == id)
    }
}

impl<'a> ParameterFinder for DesignParameterFinder<'a> {
    fn has_id(&self, id: &str) -> bool {
        self.base.has_id(id)
    }

    fn value_for_id(&self, id: &str) -> Option<String> {
        if !self.base.has_id(id) {
            return None;
        }
        match self.override_for(id) {
            Some(cev) => Some(cev.value.clone()),
            None => self.base.value_for_id(id),
        }
    }

    fn name_for_id(&self, id: &str) -> Option<String> {
        self.base.name_for_id(id)
    }

    fn all_parameter_ids(&self) -> Vec<String> {
        self.base.all_parameter_ids()
    }
}
