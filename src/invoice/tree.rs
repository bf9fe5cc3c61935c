/// A node of the assembled document: a qualified element name, its
/// attributes in insertion order, optional text and child elements.
///
/// The assembler builds these trees; the serializer renders them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(name)
        }
    }

    /// Set an attribute, replacing an earlier value of the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub(crate) fn insert(&mut self, index: usize, child: Element) {
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    pub(crate) fn extend(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children.extend(children);
    }

    pub(crate) fn into_children(self) -> Vec<Element> {
        self.children
    }

    /// Qualified name, e.g. `cbc:ID`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its prefix.
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child with the given qualified name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a slash-separated path of qualified names, taking the first
    /// match at each step: `find("cac:Party/cac:PartyName/cbc:Name")`.
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|step| !step.is_empty())
            .try_fold(self, |node, step| node.child(step))
    }

    /// Text of the element at `path`, see [`find`](Self::find).
    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path).and_then(Element::text)
    }

    /// Number of elements in this subtree, including `self`.
    pub fn element_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Element::element_count)
            .sum::<usize>()
    }
}

pub(crate) fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party() -> Element {
        let mut name = Element::new("cac:PartyName");
        name.push(Element::with_text("cbc:Name", "AAA AŞ"));
        let mut id = Element::with_text("cbc:ID", "1288331521");
        id.set_attribute("schemeID", "VKN");
        let mut ident = Element::new("cac:PartyIdentification");
        ident.push(id);
        let mut party = Element::new("cac:Party");
        party.push(ident);
        party.push(name);
        party
    }

    #[test]
    fn find_follows_path() {
        let party = party();
        assert_eq!(party.find_text("cac:PartyName/cbc:Name"), Some("AAA AŞ"));
        assert_eq!(
            party
                .find("cac:PartyIdentification/cbc:ID")
                .and_then(|e| e.attribute("schemeID")),
            Some("VKN")
        );
        assert!(party.find("cac:PostalAddress").is_none());
    }

    #[test]
    fn set_attribute_replaces() {
        let mut e = Element::new("cbc:Amount");
        e.set_attribute("currencyID", "TRY");
        e.set_attribute("currencyID", "USD");
        assert_eq!(e.attributes().len(), 1);
        assert_eq!(e.attribute("currencyID"), Some("USD"));
    }

    #[test]
    fn local_names_and_counts() {
        let party = party();
        assert_eq!(party.local_name(), "Party");
        assert_eq!(local_name("Invoice"), "Invoice");
        assert_eq!(party.element_count(), 5);
    }
}
