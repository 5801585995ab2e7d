//! Localized names for the basic colors.

pub const SUPPORTED_LANGUAGES: [&str; 8] = [
    "en-US", "es-ES", "fr-FR", "de-DE", "it-IT", "pt-BR", "ja-JP", "zh-CN",
];

/// Translations in `SUPPORTED_LANGUAGES` order.
type Translations = [&'static str; 8];

const COLORS: [(&str, Translations); 12] = [
    ("red", ["red", "rojo", "rouge", "rot", "rosso", "vermelho", "赤", "红色"]),
    ("blue", ["blue", "azul", "bleu", "blau", "blu", "azul", "青", "蓝色"]),
    ("green", ["green", "verde", "vert", "grün", "verde", "verde", "緑", "绿色"]),
    ("yellow", ["yellow", "amarillo", "jaune", "gelb", "giallo", "amarelo", "黄色", "黄色"]),
    ("orange", ["orange", "naranja", "orange", "orange", "arancione", "laranja", "オレンジ", "橙色"]),
    ("purple", ["purple", "morado", "violet", "lila", "viola", "roxo", "紫", "紫色"]),
    ("pink", ["pink", "rosa", "rose", "rosa", "rosa", "rosa", "ピンク", "粉色"]),
    ("brown", ["brown", "marrón", "marron", "braun", "marrone", "marrom", "茶色", "棕色"]),
    ("black", ["black", "negro", "noir", "schwarz", "nero", "preto", "黒", "黑色"]),
    ("white", ["white", "blanco", "blanc", "weiß", "bianco", "branco", "白", "白色"]),
    ("gray", ["gray", "gris", "gris", "grau", "grigio", "cinza", "灰色", "灰色"]),
    ("grey", ["grey", "gris", "gris", "grau", "grigio", "cinza", "灰色", "灰色"]),
];

const MODIFIERS: [(&str, Translations); 2] = [
    ("dark", ["dark", "oscuro", "foncé", "dunkel", "scuro", "escuro", "濃い", "深"]),
    ("light", ["light", "claro", "clair", "hell", "chiaro", "claro", "薄い", "浅"]),
];

fn lookup(table: &[(&str, Translations)], word: &str, language: Option<usize>) -> Option<&'static str> {
    let language = language?;
    table
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, translations)| translations[language])
}

/// Translates a color name such as `"Red"` or `"dark blue"` into `language`
/// (a tag from `SUPPORTED_LANGUAGES`).
///
/// A leading `dark`/`light` word is translated separately and kept in front.
/// Names or languages without a translation come back unchanged.
#[must_use]
pub fn translate_color_name(name: &str, language: &str) -> String {
    let normalized = name.trim().to_lowercase();
    let language = SUPPORTED_LANGUAGES.iter().position(|tag| *tag == language);

    if let Some((first, rest)) = normalized.split_once(char::is_whitespace)
        && let Some(modifier) = MODIFIERS.iter().find(|(word, _)| *word == first)
    {
        let base = rest.trim();
        let modifier = lookup(&MODIFIERS, modifier.0, language).unwrap_or(modifier.0);
        let base = lookup(&COLORS, base, language).unwrap_or(base);
        return format!("{modifier} {base}");
    }

    lookup(&COLORS, &normalized, language).map_or_else(|| name.to_owned(), str::to_owned)
}
