use std::{env, fs, path::Path};

use prettyplease::unparse;
use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::parse_quote;

#[path = "src/table.rs"]
#[allow(dead_code)]
mod table;
use table::{Range16, Range32, RangeTable};

fn hex(v: u32) -> TokenStream {
    format!("0x{v:04X}").parse::<TokenStream>().unwrap()
}

impl ToTokens for Range16 {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let (lo, hi) = (hex(self.lo.into()), hex(self.hi.into()));
        tokens.extend(quote!(Range16 { lo: #lo, hi: #hi }));
    }
}

impl ToTokens for Range32 {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let (lo, hi) = (hex(self.lo), hex(self.hi));
        tokens.extend(quote!(Range32 { lo: #lo, hi: #hi }));
    }
}

impl ToTokens for RangeTable {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let (r16, r32) = (self.r16(), self.r32());
        tokens.extend(quote!(RangeTable::from_static(&[#(#r16),*], &[#(#r32),*])));
    }
}

fn read_data(name: &str) -> String {
    let path = Path::new("data").join(name);
    println!("cargo:rerun-if-changed={}", path.display());
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

fn entries(src: &str) -> impl Iterator<Item = &str> {
    src.lines()
        .map(str::trim)
        .filter(|x| !x.is_empty() && !x.starts_with('#'))
}

fn parse_hex(s: &str) -> u32 {
    let digits = s.trim().trim_start_matches("0x");
    u32::from_str_radix(digits, 16).unwrap_or_else(|_| panic!("invalid hex code '{s}'"))
}

#[derive(Debug)]
struct JisChar {
    row: u32,
    c: char,
}

/// Shift_JIS, JIS and Unicode columns; only the last two matter here.
fn read_jisx0208() -> Vec<JisChar> {
    let src = read_data("jisx0208.txt");

    entries(&src)
        .filter_map(|line| {
            let (cols, _) = line.split_once('#').unwrap_or((line, ""));
            let mut cols = cols.split_whitespace().skip(1).map(parse_hex);
            let (jis, unicode) = cols.next().zip(cols.next())?;

            let Some(c) = char::from_u32(unicode) else {
                println!("cargo:warning=skipping invalid code point: {unicode:X}");
                return None;
            };

            Some(JisChar {
                row: (jis >> 8) - 0x20,
                c,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum Form {
    Old,
    Tolerable,
}

#[derive(Debug, Default)]
struct RegularUseList {
    standard: Vec<char>,
    old: Vec<char>,
    tolerable: Vec<char>,
}

/// One entry per line: `standard［tolerable］（old）（old）...`.
fn read_regular_use() -> RegularUseList {
    let src = read_data("jouyou.txt");
    let mut list = RegularUseList::default();

    for line in entries(&src) {
        let mut chars = line.chars();
        list.standard
            .push(chars.next().expect("entry without a standard form"));

        let mut open = None;
        for c in chars {
            match (c, open) {
                ('（', None) => open = Some(Form::Old),
                ('［', None) => open = Some(Form::Tolerable),
                ('）', Some(Form::Old)) | ('］', Some(Form::Tolerable)) => open = None,
                (c, Some(Form::Old)) => list.old.push(c),
                (c, Some(Form::Tolerable)) => list.tolerable.push(c),
                (c, None) => panic!("unexpected {c:?} in entry '{line}'"),
            }
        }
        assert!(open.is_none(), "unclosed bracket in entry '{line}'");
    }

    list
}

/// The designated kanji and, from the variant section, the variant side of
/// each `variant（regular-use form）` line.
fn read_personal_names() -> Vec<char> {
    let src = read_data("jinmei.txt");
    let mut section = "";
    let mut chars = Vec::new();

    for line in entries(&src) {
        if let Some(name) = line.strip_prefix("!!!") {
            section = name;
            continue;
        }

        match section {
            "人名用漢字" => chars.extend(
                line.split_whitespace()
                    .flat_map(|x| x.split('‐'))
                    .flat_map(str::chars),
            ),
            "人名用異体字" => chars.extend(line.chars().next()),
            s => panic!("entry outside a known section ('{s}'): '{line}'"),
        }
    }

    chars
}

/// `XXXX..YYYY ; Han # comment`, in the layout of Scripts.txt.
fn read_han() -> Vec<char> {
    let src = read_data("han.txt");

    entries(&src)
        .flat_map(|line| {
            let (line, _) = line.split_once('#').unwrap_or((line, ""));
            let (range, script) = line.split_once(';').expect("missing script field");
            assert_eq!(script.trim(), "Han", "unexpected script in '{line}'");

            let range = range.trim();
            let (lo, hi) = range.split_once("..").unwrap_or((range, range));
            (parse_hex(lo)..=parse_hex(hi)).filter_map(char::from_u32)
        })
        .collect()
}

fn main() {
    let jis = read_jisx0208();
    let level = |rows: std::ops::RangeInclusive<u32>| {
        RangeTable::build(jis.iter().filter(|x| rows.contains(&x.row)).map(|x| x.c))
    };
    let regular_use = read_regular_use();

    let tables = [
        (
            "JISX0208",
            "Printable ASCII and the JIS X 0208 repertoire.",
            RangeTable::build((' '..='~').chain(jis.iter().map(|x| x.c))),
        ),
        ("JISX0208_LEVEL1", "JIS X 0208 rows 16-47.", level(16..=47)),
        ("JISX0208_LEVEL2", "JIS X 0208 rows 48-84.", level(48..=84)),
        (
            "REGULAR_USE_STANDARD",
            "Standard forms of the regular-use kanji.",
            RangeTable::build(regular_use.standard),
        ),
        (
            "REGULAR_USE_OLD_FORM",
            "Old forms listed alongside the regular-use kanji.",
            RangeTable::build(regular_use.old),
        ),
        (
            "REGULAR_USE_TOLERABLE",
            "Tolerable forms listed alongside the regular-use kanji.",
            RangeTable::build(regular_use.tolerable),
        ),
        (
            "DESIGNATED_FOR_PERSONAL_NAMES",
            "Kanji designated for personal names beyond the regular-use list.",
            RangeTable::build(read_personal_names()),
        ),
        ("HAN", "Script=Han.", RangeTable::build(read_han())),
    ];

    let statics = tables.iter().map(|(name, doc, table)| {
        let name = format_ident!("{name}");
        quote! {
            #[doc = #doc]
            pub static #name: RangeTable = #table;
        }
    });

    let tokens = parse_quote! {
        use crate::table::{Range16, Range32, RangeTable};

        #(#statics)*
    };

    let pretty = unparse(&tokens);

    let out_dir = env::var("OUT_DIR").expect("failed to get target directory");
    let out_file = Path::new(&out_dir).join("data.rs");
    fs::write(out_file, pretty).expect("failed to write generated tables");
}
