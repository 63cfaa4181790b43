//! Template document access.
//!
//! The McPAT template is a tree of `component` elements, each holding
//! `param` and `stat` leaves with `name` / `value` attributes. Lookups are
//! exact-match, case-sensitive and first-match in document order, over all
//! descendants (nested components included), which is what the estimator's
//! own loader does.

// Imports
use {
	crate::error::Error,
	std::{fs, io, path::Path},
	xmltree::{Element, XMLNode},
};

/// Component element tag
const COMPONENT_TAG: &str = "component";

/// Leaf element tags, in search order
const PARAM_TAG: &str = "param";
const STAT_TAG: &str = "stat";

/// A loaded template document
#[derive(Clone, Debug)]
pub struct Document {
	/// Root element
	root: Element,
}

impl Document {
	/// Loads a document from the template file at `path`
	pub fn load(path: &Path) -> Result<Self, Error> {
		let file = fs::File::open(path).map_err(|source| Error::TemplateUnreadable {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_reader(io::BufReader::new(file))
	}

	/// Parses a document from a reader
	pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
		let root = Element::parse(reader).map_err(|source| Error::TemplateInvalid { source })?;
		Ok(Self { root })
	}

	/// Returns a mutable handle to the first component named `name`,
	/// in document order, or `None` if there is no such component.
	pub fn component_mut(&mut self, name: &str) -> Option<ComponentMut<'_>> {
		// The root element is itself a component in the McPAT schema
		if element_is_component(&self.root, name) {
			return Some(ComponentMut { element: &mut self.root });
		}

		find_component(&mut self.root, name).map(|element| ComponentMut { element })
	}

	/// Serializes the document to `path`
	pub fn write_to(&self, path: &Path) -> Result<(), Error> {
		let file = fs::File::create(path).map_err(|source| Error::IntermediateUnwritable {
			path: path.to_path_buf(),
			source,
		})?;

		self.root.write(io::BufWriter::new(file)).map_err(|err| {
			let source = match err {
				xmltree::Error::Io(source) => source,
				err => io::Error::new(io::ErrorKind::Other, err.to_string()),
			};
			Error::IntermediateUnwritable {
				path: path.to_path_buf(),
				source,
			}
		})
	}
}

/// Mutable handle to a single component of a [`Document`]
#[derive(Debug)]
pub struct ComponentMut<'a> {
	/// Component element
	element: &'a mut Element,
}

impl ComponentMut<'_> {
	/// Sets the attribute `name` to `value`.
	///
	/// Searches the component's `param` leaves first, then its `stat`
	/// leaves; the first match is updated. A name present in neither
	/// category is a template/tool-version mismatch and fails.
	pub fn set_value(&mut self, name: &str, value: &str) -> Result<(), Error> {
		if set_leaf(self.element, PARAM_TAG, name, value) || set_leaf(self.element, STAT_TAG, name, value) {
			return Ok(());
		}

		Err(Error::UnrecognizedAttribute { name: name.to_owned() })
	}

	/// Returns the value of the attribute `name`, searching `param`
	/// leaves first, then `stat` leaves.
	pub fn value(&self, name: &str) -> Option<&str> {
		find_leaf(self.element, PARAM_TAG, name).or_else(|| find_leaf(self.element, STAT_TAG, name))
	}
}

/// Returns whether `element` is a component named `name`
fn element_is_component(element: &Element, name: &str) -> bool {
	element.name == COMPONENT_TAG && element.attributes.get("name").map(String::as_str) == Some(name)
}

/// Searches `element`'s descendants, pre-order, for a component named `name`
fn find_component<'a>(element: &'a mut Element, name: &str) -> Option<&'a mut Element> {
	for node in &mut element.children {
		if let XMLNode::Element(child) = node {
			if element_is_component(child, name) {
				return Some(child);
			}
			if let Some(found) = find_component(child, name) {
				return Some(found);
			}
		}
	}

	None
}

/// Searches `element`'s descendants, pre-order, for a `tag` leaf named
/// `name` and sets its `value` attribute. Returns whether a leaf was set.
fn set_leaf(element: &mut Element, tag: &str, name: &str, value: &str) -> bool {
	for node in &mut element.children {
		if let XMLNode::Element(child) = node {
			if child.name == tag && child.attributes.get("name").map(String::as_str) == Some(name) {
				child.attributes.insert("value".to_owned(), value.to_owned());
				return true;
			}
			if set_leaf(child, tag, name, value) {
				return true;
			}
		}
	}

	false
}

/// Searches `element`'s descendants, pre-order, for a `tag` leaf named
/// `name`, returning its `value` attribute.
fn find_leaf<'a>(element: &'a Element, tag: &str, name: &str) -> Option<&'a str> {
	for node in &element.children {
		if let XMLNode::Element(child) = node {
			if child.name == tag && child.attributes.get("name").map(String::as_str) == Some(name) {
				return child.attributes.get("value").map(String::as_str);
			}
			if let Some(found) = find_leaf(child, tag, name) {
				return Some(found);
			}
		}
	}

	None
}
