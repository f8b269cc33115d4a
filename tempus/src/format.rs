use std::{collections::HashMap, fmt, sync::OnceLock};

use crate::Time;

/// Mask rendered when [`Time::format`] is given an empty one.
pub const DEFAULT_MASK: &str = "Y M D";

type RenderFn = fn(&Time) -> String;

struct FieldCode {
    code: char,
    render: RenderFn,
}

static FIELD_CODES: [FieldCode; 12] = [
    FieldCode {
        code: 'Y',
        render: |time| time.year().to_string(),
    },
    FieldCode {
        code: 'y',
        render: |time| time.short_year().to_string(),
    },
    FieldCode {
        code: 'M',
        render: |time| time.month().to_owned(),
    },
    FieldCode {
        code: 'm',
        render: |time| time.short_month().to_owned(),
    },
    FieldCode {
        code: 'D',
        render: Time::long_day,
    },
    FieldCode {
        code: 'd',
        render: |time| time.day().to_string(),
    },
    FieldCode {
        code: 'H',
        render: Time::long_hours,
    },
    FieldCode {
        code: 'h',
        render: |time| time.hours().to_string(),
    },
    FieldCode {
        code: 'I',
        render: Time::long_minutes,
    },
    FieldCode {
        code: 'i',
        render: |time| time.minutes().to_string(),
    },
    FieldCode {
        code: 'S',
        render: Time::long_seconds,
    },
    FieldCode {
        code: 's',
        render: |time| time.seconds().to_string(),
    },
];

struct FieldCodes(HashMap<char, RenderFn>);

static CODES: OnceLock<FieldCodes> = OnceLock::new();

impl FieldCodes {
    fn get() -> &'static Self {
        CODES.get_or_init(|| {
            let mut codes = HashMap::with_capacity(FIELD_CODES.len());

            for field in &FIELD_CODES {
                if codes.insert(field.code, field.render).is_some() {
                    panic!("field code `{}` has been defined multiple times", field.code);
                }
            }

            Self(codes)
        })
    }

    fn render(&self, code: char, time: &Time) -> Option<String> {
        self.0.get(&code).map(|render| render(time))
    }
}

impl Time {
    /// Renders the time through `mask`.
    ///
    /// Every character of the mask that is a field code (`Y y M m D d H h I i
    /// S s`) is replaced by that field, anything else is copied as is. There
    /// is no way to escape a code. An empty mask means [`DEFAULT_MASK`].
    pub fn format(&self, mask: &str) -> String {
        let mask = if mask.is_empty() { DEFAULT_MASK } else { mask };
        let codes = FieldCodes::get();
        let mut formatted = String::with_capacity(mask.len() * 2);

        for ch in mask.chars() {
            match codes.render(ch, self) {
                Some(field) => formatted.push_str(&field),
                None => formatted.push(ch),
            }
        }

        formatted
    }

    /// Renders a single field code, `None` if `code` isn't one.
    pub fn render_code(&self, code: char) -> Option<String> {
        FieldCodes::get().render(code, self)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_MASK))
    }
}
