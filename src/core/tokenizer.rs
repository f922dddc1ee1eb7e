// src/core/tokenizer.rs
// Lenient markup lexer. Yields tags, text, comments and declarations in source order.
// Never fails: anything that does not form a tag is handed back as text.

/// Elements whose content is raw text up to the matching close tag.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// ASCII-lowercased.
    pub name: String,
    /// Entity-decoded. `None` for a bare attribute like `selected`.
    pub value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Verbatim source text, entities untouched.
    Text(&'a str),
    /// Body of `<!-- ... -->`.
    Comment(&'a str),
    /// A whole `<!...>` or `<?...>` construct, brackets included.
    Declaration(&'a str),
    StartTag {
        name: String,
        attrs: Vec<Attribute>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
}

pub struct Tokens<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
    /// Set after `<script>`/`<style>`: the next token is everything up to its close tag.
    raw_text: Option<&'static str>,
}

impl<'a> Tokens<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0, n: s.len(), raw_text: None }
    }

    #[inline]
    fn is_ws(c: u8) -> bool {
        matches!(c, b' ' | b'\t' | b'\r' | b'\n' | b'\x0c')
    }

    #[inline]
    fn skip_ws(&self, mut j: usize) -> usize {
        while j < self.n && Self::is_ws(self.b[j]) {
            j += 1;
        }
        j
    }

    /// Text from the cursor up to the next `<` at or after `from`.
    fn text(&mut self, from: usize) -> Token<'a> {
        let end = self.s[from..].find('<').map_or(self.n, |p| from + p);
        let t = &self.s[self.i..end];
        self.i = end;
        Token::Text(t)
    }

    fn raw_text_until_close(&mut self, tag: &str) -> Option<Token<'a>> {
        let close = join!("</", tag);
        let end = find_ci(&self.s[self.i..], &close).map_or(self.n, |p| self.i + p);
        if end == self.i {
            return None;
        }
        let t = &self.s[self.i..end];
        self.i = end;
        Some(Token::Text(t))
    }

    /// Try to read a tag-like construct at the cursor (which sits on `<`).
    /// `None` means "not markup": the caller treats the `<` as text.
    fn markup(&mut self) -> Option<Token<'a>> {
        let rest = &self.s[self.i..];

        if let Some(body) = rest.strip_prefix("<!--") {
            return Some(match body.find("-->") {
                Some(e) => {
                    self.i += 4 + e + 3;
                    Token::Comment(&body[..e])
                }
                None => {
                    self.i = self.n;
                    Token::Comment(body)
                }
            });
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            let e = rest.find('>')?;
            self.i += e + 1;
            return Some(Token::Declaration(&rest[..=e]));
        }

        if rest.starts_with("</") {
            let start = self.i + 2;
            if start >= self.n || !self.b[start].is_ascii_alphabetic() {
                return None;
            }
            let mut j = start;
            while j < self.n && !Self::is_ws(self.b[j]) && self.b[j] != b'>' && self.b[j] != b'/' {
                j += 1;
            }
            let name = self.s[start..j].to_ascii_lowercase();
            let close = self.s[j..].find('>')? + j;
            self.i = close + 1;
            return Some(Token::EndTag { name });
        }

        if self.i + 1 < self.n && self.b[self.i + 1].is_ascii_alphabetic() {
            return self.start_tag();
        }
        None
    }

    fn start_tag(&mut self) -> Option<Token<'a>> {
        let start = self.i + 1;
        let mut j = start;
        while j < self.n && !Self::is_ws(self.b[j]) && self.b[j] != b'>' && self.b[j] != b'/' {
            j += 1;
        }
        let name = self.s[start..j].to_ascii_lowercase();

        let mut attrs = Vec::new();
        let mut self_closing = false;
        loop {
            j = self.skip_ws(j);
            if j >= self.n {
                // unterminated tag: leave it as text
                return None;
            }
            match self.b[j] {
                b'>' => {
                    j += 1;
                    break;
                }
                b'/' => {
                    if j + 1 < self.n && self.b[j + 1] == b'>' {
                        self_closing = true;
                        j += 2;
                        break;
                    }
                    j += 1;
                    continue;
                }
                _ => {}
            }

            let name_start = j;
            while j < self.n {
                let c = self.b[j];
                if Self::is_ws(c) || c == b'=' || c == b'>' {
                    break;
                }
                if c == b'/' && j + 1 < self.n && self.b[j + 1] == b'>' {
                    break;
                }
                j += 1;
            }
            if j == name_start {
                // stray '=' or similar
                j += 1;
                continue;
            }
            let attr_name = self.s[name_start..j].to_ascii_lowercase();

            let after_name = self.skip_ws(j);
            let mut value = None;
            if after_name < self.n && self.b[after_name] == b'=' {
                j = self.skip_ws(after_name + 1);
                if j < self.n && (self.b[j] == b'"' || self.b[j] == b'\'') {
                    let quote = self.b[j] as char;
                    let v_start = j + 1;
                    let v_end = self.s[v_start..].find(quote)? + v_start;
                    value = Some(&self.s[v_start..v_end]);
                    j = v_end + 1;
                } else {
                    let v_start = j;
                    while j < self.n && !Self::is_ws(self.b[j]) && self.b[j] != b'>' {
                        j += 1;
                    }
                    value = Some(&self.s[v_start..j]);
                }
            }

            attrs.push(Attribute {
                name: attr_name,
                value: value.map(|v| html_escape::decode_html_entities(v).into_owned()),
            });
        }

        self.i = j;
        if !self_closing {
            self.raw_text = RAW_TEXT_ELEMENTS.iter().copied().find(|t| *t == name);
        }
        Some(Token::StartTag { name, attrs, self_closing })
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(tag) = self.raw_text.take() {
            if let Some(tok) = self.raw_text_until_close(tag) {
                return Some(tok);
            }
        }
        if self.i >= self.n {
            return None;
        }
        if self.b[self.i] == b'<' {
            if let Some(tok) = self.markup() {
                return Some(tok);
            }
            // a literal '<'
            return Some(self.text(self.i + 1));
        }
        Some(self.text(self.i))
    }
}

/// ASCII case-insensitive substring search.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() {
        return Some(0);
    }
    if h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}
