//! Test fixtures - TEI documents and canon registries.

/// Registry with title objects, the shape CBETA ships
pub const CANONS_JSON: &str = r#"{
  "T": {"title-zh": "大正新脩大藏經", "title-en": "Taishō Tripiṭaka"},
  "X": {"title-zh": "卍新纂續藏經", "title-en": "Manji Shinsan Dainihon Zokuzōkyō"}
}"#;

/// Truncated markup; fails to parse
pub const MALFORMED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0" xml:id="T99n9999">
  <teiHeader>
    <fileDesc>
      <titleStmt><title>未完"#;

/// Builder for minimal TEI P5 documents
#[derive(Debug, Clone, Default)]
pub struct Tei {
    id: String,
    titles: Vec<String>,
    author: Option<String>,
    source: Option<String>,
    project_desc: Option<Vec<(String, String)>>,
}

impl Tei {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Add a `<projectDesc>` paragraph with the given `xml:lang`
    pub fn project_paragraph(mut self, lang: &str, text: &str) -> Self {
        self.project_desc
            .get_or_insert_with(Vec::new)
            .push((lang.to_string(), text.to_string()));
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<TEI xmlns=\"http://www.tei-c.org/ns/1.0\" xml:id=\"{}\">\n  <teiHeader>\n    <fileDesc>\n      <titleStmt>\n",
            self.id
        ));
        for title in &self.titles {
            out.push_str(&format!("        <title>{}</title>\n", title));
        }
        if let Some(author) = &self.author {
            out.push_str(&format!("        <author>{}</author>\n", author));
        }
        out.push_str("      </titleStmt>\n");
        if let Some(source) = &self.source {
            out.push_str(&format!(
                "      <sourceDesc>\n        <bibl>{}</bibl>\n      </sourceDesc>\n",
                source
            ));
        }
        out.push_str("    </fileDesc>\n");
        if let Some(paragraphs) = &self.project_desc {
            out.push_str("    <encodingDesc>\n      <projectDesc>\n");
            for (lang, text) in paragraphs {
                out.push_str(&format!("        <p xml:lang=\"{}\">{}</p>\n", lang, text));
            }
            out.push_str("      </projectDesc>\n    </encodingDesc>\n");
        }
        out.push_str("  </teiHeader>\n  <text><body><p>正文</p></body></text>\n</TEI>\n");
        out
    }
}

/// Platform Sutra header: Chan/Zen, Song, no origin keyword
pub fn platform_sutra() -> String {
    Tei::new("T48n2008")
        .title("禪宗六祖壇經")
        .author("釋宗寶")
        .source("宋 宗寶編")
        .project_paragraph("zh-Hant", "CBETA 人工輸入")
        .project_paragraph("en", "Input by CBETA")
        .build()
}

/// Heart Sutra header translated in the Tang by an Indian-titled monk
pub fn heart_sutra() -> String {
    Tei::new("T08n0251")
        .title("般若波羅蜜多心經")
        .author("唐 玄奘譯")
        .source("天竺 梵本")
        .project_paragraph("en", "Text as provided by Mr. Wu")
        .build()
}

/// Pure Land text in the continuation canon, no projectDesc at all
pub fn pure_land_text() -> String {
    Tei::new("X62n1170")
        .title("淨土指歸集")
        .author("明 大佑集")
        .build()
}
