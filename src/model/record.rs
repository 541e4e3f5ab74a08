use std::sync::LazyLock;

use regex::Regex;

use super::ChoiceList;

/// Maximum number of extra free-text fields a form can carry.
pub const MAX_EXTRA_FIELDS: usize = 3;

/// Login base used at startup and after a reset unless configured otherwise.
pub const DEFAULT_LOGIN: &str = "user";

/// Separator between the fields of a record line.
pub const FIELD_SEPARATOR: char = ';';

static LOGIN_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_[0-9]{2}$").expect("valid hardcoded regex"));

/// Parses the ID field the way a lenient `atoi` would, falling back to 1.
///
/// Leading whitespace and a sign are accepted, then leading digits are read
/// and anything after them is ignored. Empty, non-numeric, zero, negative and
/// out-of-range input all yield 1.
pub fn parse_id(input: &str) -> u64 {
    let s = input.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    match rest[..digits_len].parse::<u64>() {
        Ok(id) if id > 0 && !negative => id,
        _ => 1,
    }
}

/// Removes a trailing `_NN` counter suffix (exactly two ASCII digits), if present.
///
/// A base that legitimately ends in `_NN` is stripped too.
pub fn strip_login_suffix(login: &str) -> &str {
    LOGIN_SUFFIX_RE
        .find(login)
        .map_or(login, |m| &login[..m.start()])
}

/// Formats `base_NN` with the counter zero-padded to two digits.
pub fn format_login(base: &str, counter: u32) -> String {
    format!("{base}_{counter:02}")
}

/// Joins record fields with [`FIELD_SEPARATOR`], without a trailing separator.
pub fn join_record<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    let mut line = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(FIELD_SEPARATOR);
        }
        line.push_str(field);
    }
    line
}

/// All mutable state of one data-entry session.
///
/// Holds the raw text of the ID and login fields, the choice fields with their
/// typed values, the extra fields, the accumulated log, and the two counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    id_field: String,
    login_field: String,
    choices: Vec<ChoiceList>,
    extras: Vec<String>,
    log: String,
    id_counter: u64,
    login_counter: u32,
    default_login: String,
}

impl FormState {
    /// Creates a fresh session: counters at 1, ID field `1`, login field `default_login`.
    pub fn new(choices: Vec<ChoiceList>, default_login: impl Into<String>) -> Self {
        let default_login = default_login.into();
        Self {
            id_field: "1".to_string(),
            login_field: default_login.clone(),
            choices,
            extras: Vec::new(),
            log: String::new(),
            id_counter: 1,
            login_counter: 1,
            default_login,
        }
    }

    /// Appends the record built from the current field values to the log.
    ///
    /// Returns the appended line. Afterwards the ID field holds the next ID and
    /// the login field holds the bare login base.
    pub fn add_record(&mut self) -> String {
        let id = parse_id(&self.id_field);
        let base = strip_login_suffix(&self.login_field).to_string();
        let login = format_login(&base, self.login_counter);
        let id_text = id.to_string();

        let line = join_record(
            [id_text.as_str(), login.as_str()]
                .into_iter()
                .chain(self.choices.iter().map(ChoiceList::prefix))
                .chain(self.extras.iter().map(String::as_str)),
        );

        if !self.log.is_empty() {
            self.log.push('\n');
        }
        self.log.push_str(&line);

        self.id_counter = id.saturating_add(1);
        self.login_counter = self.login_counter.saturating_add(1);
        self.id_field = self.id_counter.to_string();
        self.login_field = base;

        line
    }

    /// Restores counters, log, ID and login fields to their startup values.
    ///
    /// Choice and extra field values are left as they are.
    pub fn reset(&mut self) {
        self.id_counter = 1;
        self.login_counter = 1;
        self.log.clear();
        self.id_field = "1".to_string();
        self.login_field = self.default_login.clone();
    }

    /// Adds an empty extra field. Returns `false` when the cap is already reached.
    pub fn add_extra_field(&mut self) -> bool {
        if self.extras.len() >= MAX_EXTRA_FIELDS {
            return false;
        }
        self.extras.push(String::new());
        true
    }

    /// Returns the login the next record would get with the current login field.
    pub fn next_login(&self) -> String {
        format_login(strip_login_suffix(&self.login_field), self.login_counter)
    }

    /// Returns the number of non-empty lines in the log.
    pub fn record_count(&self) -> usize {
        self.log.lines().filter(|l| !l.trim().is_empty()).count()
    }

    /// Returns the raw ID field text.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Returns the ID field for editing.
    pub fn id_field_mut(&mut self) -> &mut String {
        &mut self.id_field
    }

    /// Returns the raw login field text.
    pub fn login_field(&self) -> &str {
        &self.login_field
    }

    /// Returns the login field for editing.
    pub fn login_field_mut(&mut self) -> &mut String {
        &mut self.login_field
    }

    /// Returns the choice fields in declaration order.
    pub fn choices(&self) -> &[ChoiceList] {
        &self.choices
    }

    /// Returns the choice field at `index`, if any.
    pub fn choice_mut(&mut self, index: usize) -> Option<&mut ChoiceList> {
        self.choices.get_mut(index)
    }

    /// Returns the extra field values in the order they were added.
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    /// Returns the extra field at `index`, if any.
    pub fn extra_mut(&mut self, index: usize) -> Option<&mut String> {
        self.extras.get_mut(index)
    }

    /// Returns the accumulated log text.
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Replaces the log text, e.g. after the user edited it by hand.
    pub fn set_log(&mut self, log: impl Into<String>) {
        self.log = log.into();
    }

    /// Returns the ID counter (the ID after the last record, or 1).
    pub fn id_counter(&self) -> u64 {
        self.id_counter
    }

    /// Returns the login counter used for the next record.
    pub fn login_counter(&self) -> u32 {
        self.login_counter
    }

    /// Returns the login base restored on reset.
    pub fn default_login(&self) -> &str {
        &self.default_login
    }
}
