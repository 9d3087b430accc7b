use std::collections::HashSet;

use lazy_static::lazy_static;
use nc_core::Language;

lazy_static! {
    static ref EN: HashSet<&'static str> = [
        "the", "a", "an", "and", "or", "but", "if", "then", "else", "when", "while",
        "for", "to", "of", "in", "on", "at", "by", "with", "from", "into", "over",
        "after", "before", "between", "under", "about", "against", "during", "is",
        "am", "are", "was", "were", "be", "been", "being", "has", "have", "had",
        "do", "does", "did", "will", "would", "shall", "should", "can", "could",
        "may", "might", "must", "it", "its", "this", "that", "these", "those", "he",
        "she", "they", "we", "you", "his", "her", "their", "our", "your", "as",
        "not", "no", "so", "than", "too", "very", "more", "most", "other", "some",
        "such", "only", "own", "same", "also", "there", "here", "what", "which",
        "who", "whom", "how", "all", "any", "both", "each", "few",
    ]
    .into_iter()
    .collect();
    static ref ZH: HashSet<&'static str> = [
        "我们", "他们", "你们", "这个", "那个", "什么", "可以", "没有", "自己",
        "现在", "因为", "所以", "但是", "如果", "这样", "那样", "还是", "已经",
        "以及", "对于", "其中", "以后", "之前", "之后", "一个", "一些", "这些",
        "那些", "不是", "就是", "虽然", "然而", "并且", "或者", "由于", "关于",
    ]
    .into_iter()
    .collect();
    static ref TH: HashSet<&'static str> = [
        "ที่", "และ", "ใน", "ของ", "ได้", "ให้", "เป็น", "มี", "จะ", "ไม่", "ว่า",
        "การ", "กับ", "แต่", "หรือ", "เมื่อ", "จาก", "โดย", "นี้", "ถึง", "ก็", "อยู่",
    ]
    .into_iter()
    .collect();
    static ref VI: HashSet<&'static str> = [
        "và", "của", "là", "có", "được", "trong", "cho", "với", "này", "các",
        "một", "những", "để", "không", "người", "khi", "đã", "sẽ", "về", "cũng",
        "như", "tại", "theo", "trên", "vào", "ra", "còn", "thì", "đó", "nên",
    ]
    .into_iter()
    .collect();
    static ref ID: HashSet<&'static str> = [
        "yang", "dan", "di", "ini", "itu", "dengan", "untuk", "dari", "pada",
        "adalah", "ke", "tidak", "akan", "juga", "atau", "telah", "dalam", "bisa",
        "ada", "mereka", "kami", "kita", "saya", "sudah", "karena", "jika", "oleh",
        "saat", "serta", "bahwa",
    ]
    .into_iter()
    .collect();
    static ref MS: HashSet<&'static str> = [
        "yang", "dan", "di", "ini", "itu", "dengan", "untuk", "dari", "pada",
        "adalah", "ke", "tidak", "akan", "juga", "atau", "telah", "dalam", "boleh",
        "ada", "mereka", "kami", "kita", "saya", "sudah", "kerana", "jika", "oleh",
        "masa", "serta", "bahawa",
    ]
    .into_iter()
    .collect();
}

fn table(language: Language) -> &'static HashSet<&'static str> {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
        Language::Th => &TH,
        Language::Vi => &VI,
        Language::Id => &ID,
        Language::Ms => &MS,
    }
}

/// Case-insensitive stopword check against the language's table.
pub fn is_stopword(language: Language, token: &str) -> bool {
    table(language).contains(token.to_lowercase().as_str())
}
