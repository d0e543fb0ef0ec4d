// Key -> text tables for the two languages the page ships. Keys mirror the
// `data-i18n` attributes in the markup; values containing markup are injected
// as HTML by the localization layer, everything else as plain text.

pub static EN: &[(&str, &str)] = &[
    ("nav-about", "About"),
    ("nav-experience", "Experience"),
    ("nav-work", "Work"),
    ("nav-contact", "Contact"),
    ("hero-greeting", "Hi, my name is"),
    ("hero-name", "Ren Takahashi."),
    (
        "hero-tagline",
        "I build <span class='highlight'>living interfaces</span> for the web.",
    ),
    ("hero-cta", "Get in touch"),
    ("about-title", "About Me"),
    (
        "about-p1",
        "I'm a front-end developer based in Tokyo who cares about the small \
         details of motion: easing, timing, and interfaces that feel alive \
         without getting in the way.",
    ),
    (
        "about-p2",
        "These days most of my experiments are <span class='highlight'>Rust \
         and WebAssembly</span> running quietly behind otherwise ordinary \
         pages.",
    ),
    ("experience-title", "Where I've Worked"),
    ("tab-job1", "Nova Analytics"),
    ("tab-job2", "Hanabi Works"),
    ("tab-job3", "Pale Blue"),
    ("job1-role", "Senior Front-End Engineer"),
    ("job1-period", "2022 - Present"),
    (
        "job1-desc",
        "Lead the visual engineering of the company's marketing surfaces, \
         moving the heaviest animations from script to WebAssembly without \
         growing the download.",
    ),
    ("job2-role", "Creative Developer"),
    ("job2-period", "2019 - 2022"),
    (
        "job2-desc",
        "Built interactive installations and data-driven visuals for agency \
         clients, most of them canvas or WebGL work on short deadlines.",
    ),
    ("job3-role", "Web Developer"),
    ("job3-period", "2017 - 2019"),
    (
        "job3-desc",
        "Maintained and shipped marketing pages for a small studio, which is \
         where the habit of animating everything started.",
    ),
    ("work-title", "Things I've Built"),
    ("project1-title", "Aurora Dashboard"),
    (
        "project1-desc",
        "A realtime metrics wall rendering a few thousand points per frame in \
         the browser.",
    ),
    ("project2-title", "Kana Drill"),
    (
        "project2-desc",
        "A spaced-repetition trainer for Japanese kana with handwriting \
         recognition on a canvas.",
    ),
    ("project3-title", "Particle Playground"),
    (
        "project3-desc",
        "The toy that grew into this site's background: a field of drifting \
         particles joined by fading lines.",
    ),
    ("contact-title", "Say Hello"),
    (
        "contact-text",
        "I'm open to interesting front-end and WASM work. The fastest way to \
         reach me is plain email, in English or Japanese.",
    ),
    ("contact-cta", "Send a Message"),
    ("footer-credit", "Designed and built by Ren Takahashi"),
];

pub static JA: &[(&str, &str)] = &[
    ("nav-about", "私について"),
    ("nav-experience", "経歴"),
    ("nav-work", "制作実績"),
    ("nav-contact", "お問い合わせ"),
    ("hero-greeting", "はじめまして、"),
    ("hero-name", "高橋蓮です。"),
    (
        "hero-tagline",
        "ウェブに<span class='highlight'>生きたインターフェース</span>をつくっています。",
    ),
    ("hero-cta", "お問い合わせ"),
    ("about-title", "私について"),
    (
        "about-p1",
        "東京を拠点とするフロントエンドエンジニアです。イージングやタイミング\
         など動きの細部にこだわり、邪魔にならずに生きて感じられるインター\
         フェースを目指しています。",
    ),
    (
        "about-p2",
        "最近の実験はほとんどが、ふつうのページの裏で静かに動く<span \
         class='highlight'>RustとWebAssembly</span>です。",
    ),
    ("experience-title", "経歴"),
    ("tab-job1", "Nova Analytics"),
    ("tab-job2", "ハナビワークス"),
    ("tab-job3", "ペールブルー"),
    ("job1-role", "シニアフロントエンドエンジニア"),
    ("job1-period", "2022年 - 現在"),
    (
        "job1-desc",
        "マーケティングサイトのビジュアル実装を担当。重いアニメーションを\
         スクリプトからWebAssemblyへ、ダウンロードサイズを増やさずに移行\
         しました。",
    ),
    ("job2-role", "クリエイティブデベロッパー"),
    ("job2-period", "2019年 - 2022年"),
    (
        "job2-desc",
        "代理店の案件でインタラクティブな展示やデータビジュアライゼーションを\
         制作。多くは短納期のcanvasやWebGLの仕事でした。",
    ),
    ("job3-role", "ウェブデベロッパー"),
    ("job3-period", "2017年 - 2019年"),
    (
        "job3-desc",
        "小さなスタジオでマーケティングページの開発と運用を担当。あらゆる\
         ものをアニメーションさせる癖はここで身につきました。",
    ),
    ("work-title", "これまでの制作"),
    ("project1-title", "Auroraダッシュボード"),
    (
        "project1-desc",
        "ブラウザ上で毎フレーム数千ポイントを描画するリアルタイムのメトリクス\
         ダッシュボード。",
    ),
    ("project2-title", "かなドリル"),
    (
        "project2-desc",
        "キャンバス上の手書き認識を備えた、日本語かなの反復学習アプリ。",
    ),
    ("project3-title", "パーティクルプレイグラウンド"),
    (
        "project3-desc",
        "このサイトの背景になったおもちゃ。漂うパーティクルを薄れていく線で\
         つないでいます。",
    ),
    ("contact-title", "ごあいさつ"),
    (
        "contact-text",
        "フロントエンドやWASMのお仕事のご相談を歓迎します。英語でも日本語\
         でも、メールでお気軽にご連絡ください。",
    ),
    ("contact-cta", "メッセージを送る"),
    ("footer-credit", "デザイン・実装 高橋蓮"),
];

pub fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_tables_carry_the_same_keys_in_the_same_order() {
        assert_eq!(EN.len(), JA.len());
        for ((en_key, _), (ja_key, _)) in EN.iter().zip(JA.iter()) {
            assert_eq!(en_key, ja_key);
        }
    }

    #[test]
    fn keys_are_unique() {
        for (index, (key, _)) in EN.iter().enumerate() {
            assert!(
                EN.iter().skip(index + 1).all(|(other, _)| other != key),
                "duplicate key {}",
                key
            );
        }
    }

    #[test]
    fn lookup_returns_the_entry_for_a_known_key() {
        assert_eq!(lookup(EN, "nav-about"), Some("About"));
        assert_eq!(lookup(JA, "nav-about"), Some("私について"));
    }

    #[test]
    fn lookup_misses_return_nothing() {
        assert_eq!(lookup(EN, "nav-missing"), None);
        assert_eq!(lookup(JA, ""), None);
    }

    #[test]
    fn each_language_has_at_least_one_markup_value() {
        assert!(EN.iter().any(|(_, text)| text.contains('<')));
        assert!(JA.iter().any(|(_, text)| text.contains('<')));
    }
}
