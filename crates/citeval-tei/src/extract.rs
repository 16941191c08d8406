//! Reference extraction from TEI `<biblStruct>` elements

use crate::entry::BibEntry;
use crate::xml::XmlElement;

/// Separator between authors in the BibTeX `author` field
const AUTHOR_SEPARATOR: &str = " and\n      ";

/// An author with both name parts present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeiAuthor {
    pub surname: String,
    pub forename: String,
}

impl TeiAuthor {
    /// Read a `<persName>`; authors missing either name part are dropped
    fn from_pers_name(pers_name: &XmlElement) -> Option<Self> {
        Some(Self {
            surname: pers_name.child("surname")?.text.clone(),
            forename: pers_name.child("forename")?.text.clone(),
        })
    }

    /// `Surname, Forename`
    pub fn bibtex_name(&self) -> String {
        format!("{}, {}", self.surname, self.forename)
    }
}

/// Fields pulled out of one `<biblStruct>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeiReference {
    pub id: Option<String>,
    pub title: String,
    pub authors: Vec<TeiAuthor>,
    pub booktitle: String,
    pub address: String,
    pub publisher: String,
    /// ISO-style date from `<date when="...">`
    pub date: String,
    pub pages: Option<(String, String)>,
    pub doi: String,
}

fn text_of(element: Option<&XmlElement>) -> String {
    element.map(|e| e.text.clone()).unwrap_or_default()
}

impl TeiReference {
    pub fn from_element(bibl: &XmlElement) -> Self {
        let analytic = bibl.child("analytic");
        let monogr = bibl.child("monogr");
        let meeting = monogr.and_then(|m| m.child("meeting"));
        let imprint = monogr.and_then(|m| m.child("imprint"));

        let authors: Vec<TeiAuthor> = analytic
            .map(|a| {
                a.descendants_named("author")
                    .flat_map(|author| author.children_named("persName"))
                    .filter_map(TeiAuthor::from_pers_name)
                    .collect()
            })
            .unwrap_or_default();

        let pages = imprint
            .and_then(|i| i.child_with("biblScope", "unit", "page"))
            .map(|scope| {
                (
                    scope.attr("from").unwrap_or_default().to_string(),
                    scope.attr("to").unwrap_or_default().to_string(),
                )
            });

        Self {
            id: bibl.attr("xml:id").map(str::to_string),
            title: text_of(analytic.and_then(|a| a.descendant("title"))),
            authors,
            booktitle: text_of(monogr.and_then(|m| m.descendant_with("title", "level", "m"))),
            address: text_of(meeting.and_then(|m| {
                m.descendants_named("address")
                    .find_map(|address| address.child("addrLine"))
            })),
            publisher: text_of(imprint.and_then(|i| i.child("publisher"))),
            date: imprint
                .and_then(|i| i.child("date"))
                .and_then(|d| d.attr("when"))
                .unwrap_or_default()
                .to_string(),
            pages,
            doi: text_of(analytic.and_then(|a| a.descendant_with("idno", "type", "DOI"))),
        }
    }

    /// Year part of the date (before the first `-`)
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or_default()
    }

    /// Month part of the date, empty when the date has no `-`
    pub fn month(&self) -> &str {
        self.date.split('-').nth(1).unwrap_or_default()
    }

    pub fn page_range(&self) -> String {
        self.pages
            .as_ref()
            .map(|(from, to)| format!("{}--{}", from, to))
            .unwrap_or_default()
    }

    pub fn to_bib_entry(&self) -> BibEntry {
        let author = self
            .authors
            .iter()
            .map(TeiAuthor::bibtex_name)
            .collect::<Vec<_>>()
            .join(AUTHOR_SEPARATOR);

        let mut entry = BibEntry::new(self.id.clone().unwrap_or_default(), "inproceedings");
        entry.add_field("title", self.title.as_str());
        entry.add_field("author", author);
        entry.add_field("booktitle", self.booktitle.as_str());
        entry.add_field("month", self.month());
        entry.add_field("year", self.year());
        entry.add_field("address", self.address.as_str());
        entry.add_field("publisher", self.publisher.as_str());
        entry.add_field("doi", self.doi.as_str());
        entry.add_field("pages", self.page_range());
        entry
    }
}

/// Every `<biblStruct>` below the root, in document order
pub fn extract_references(root: &XmlElement) -> Vec<TeiReference> {
    root.descendants_named("biblStruct")
        .map(TeiReference::from_element)
        .collect()
}
