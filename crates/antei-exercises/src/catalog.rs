//! The built-in exercise library, grouped by training intent.
//!
//! Entries are reference content shown verbatim in the results view and
//! the exported report. Ordering within a group is progression order
//! (easiest first), which the selector relies on when truncating.

use std::sync::LazyLock;

use antei_core::models::exercise::Exercise;

fn entry(name: &str, description: &str, steps: &[&str], illustration: &str) -> Exercise {
    Exercise {
        name: name.to_string(),
        description: description.to_string(),
        instructions: steps.iter().map(|s| s.to_string()).collect(),
        illustration: illustration.to_string(),
    }
}

/// 片脚立位訓練のバリエーション
pub fn single_leg_standing() -> &'static [Exercise] {
    static GROUP: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
        vec![
            entry(
                "基本片脚立位",
                "バランス能力の基礎を築く最も重要な運動です。転倒予防の第一歩として最適です。",
                &[
                    "壁や手すりの近くで安全を確保してください",
                    "両手を腰に当て、片足を床から5cm程度浮かせます",
                    "目線は前方の一点を見つめ、姿勢を安定させます",
                    "30秒間キープを目標に、左右交互に実施してください",
                    "毎日2-3セット実施し、徐々に時間を延ばしていきます",
                ],
                "/images/openeye.PNG",
            ),
            entry(
                "閉眼片脚立位",
                "視覚に頼らないバランス能力を鍛える高度な訓練です。内耳の平衡感覚を強化します。",
                &[
                    "基本片脚立位が安定してできるようになってから挑戦してください",
                    "安全な場所で、壁の近くに立ちます",
                    "片足立ちの姿勢を取った後、ゆっくりと目を閉じます",
                    "10-15秒間キープを目標にします",
                    "左右交互に実施し、毎日1-2セット行います",
                ],
                "/images/closedeye.PNG",
            ),
            entry(
                "動的片脚立位",
                "動きながらのバランス訓練で、実用的なバランス能力を向上させます。",
                &[
                    "片足立ちの姿勢を取ります",
                    "浮かせた足を前後左右にゆっくりと動かします",
                    "体幹を安定させたまま、8の字を描くように動かします",
                    "各方向10回ずつ実施します",
                    "左右交互に行い、毎日2セット実施しましょう",
                ],
                "/images/openeye.PNG",
            ),
        ]
    });
    &GROUP
}

/// バランス訓練の追加エクササイズ
pub fn balance_drills() -> &'static [Exercise] {
    static GROUP: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
        vec![
            entry(
                "タンデム立位",
                "片脚立位訓練の次のステップとして、より高度なバランス能力を養います。",
                &[
                    "壁の近くで安全を確保してください",
                    "片足のつま先を、もう一方の足のかかとに触れるように配置します",
                    "両足が一直線上に並ぶようにします",
                    "両手を腰に当て、姿勢を安定させます",
                    "20-30秒間キープを目標にします",
                    "左右交互に実施し、毎日2-3セット行います",
                ],
                "/images/openeye.PNG",
            ),
            entry(
                "ヒールトゥウォーク",
                "踵からつま先の順で歩くことで、動的バランス能力を向上させます。",
                &[
                    "まっすぐな線を想像し、その上を歩きます",
                    "踵からつま先の順で着地します",
                    "次の足の踵が前の足のつま先に触れるように歩きます",
                    "腕を横に広げてバランスを取ります",
                    "10歩前進した後、後ろ向きに10歩戻ります",
                    "毎日2-3セット実施しましょう",
                ],
                "/images/openeye.PNG",
            ),
            entry(
                "ステップアップ",
                "階段やステップを使った実用的なバランスと筋力訓練です。",
                &[
                    "安定したステップや階段の一段目に立ちます",
                    "片足でステップに上がります",
                    "ゆっくりと元の位置に戻ります",
                    "左右交互に10回ずつ実施します",
                    "慣れてきたら高さを上げて挑戦しましょう",
                    "毎日2-3セット実施してください",
                ],
                "/images/openeye.PNG",
            ),
        ]
    });
    &GROUP
}

/// スクワットのバリエーション
pub fn squats() -> &'static [Exercise] {
    static GROUP: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
        vec![
            entry(
                "基本スクワット",
                "下肢筋力とバランスを同時に鍛える全身運動の王様です。日常生活の基本動作を向上させます。",
                &[
                    "足を肩幅より少し広めに開いて立ちます",
                    "つま先はやや外側を向くようにします",
                    "胸を張り、背筋を伸ばしたまま腰を下ろします",
                    "太ももが床と平行になるまで下げます（膝が90度）",
                    "膝がつま先より前に出ないよう注意します",
                    "かかとで床を押すようにして立ち上がります",
                    "10-15回を2-3セット実施しましょう",
                    "呼吸は下ろす時に吸い、立ち上がる時に吐きます",
                ],
                "/images/sit.PNG",
            ),
            entry(
                "ウォールスクワット",
                "壁を使った安全なスクワットで、正しいフォームを身につけます。",
                &[
                    "壁に背中を付けて立ちます",
                    "足を肩幅に開き、壁から少し離れます",
                    "背中を壁に付けたまま、ゆっくりと腰を下ろします",
                    "太ももが床と平行になるまで下げます",
                    "5秒間キープした後、ゆっくりと立ち上がります",
                    "10回を2-3セット実施しましょう",
                ],
                "/images/sit.PNG",
            ),
            entry(
                "シングルレッグスクワット",
                "片脚でのスクワットで、より高度なバランスと筋力を鍛えます。",
                &[
                    "片足で立ち、もう一方の足を前に伸ばします",
                    "手を前に伸ばしてバランスを取ります",
                    "ゆっくりと腰を下ろします（無理のない範囲で）",
                    "元の姿勢に戻ります",
                    "左右各5-10回を2セット実施しましょう",
                    "不安定な場合は椅子の背もたれに手を置いて行います",
                ],
                "/images/sit.PNG",
            ),
        ]
    });
    &GROUP
}

/// 体幹強化エクササイズ
pub fn core_drills() -> &'static [Exercise] {
    static GROUP: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
        vec![
            entry(
                "プランク",
                "体幹の深層筋を鍛え、腰痛予防と姿勢改善に効果的な運動です。",
                &[
                    "うつ伏せになり、肘とつま先で体を支えます",
                    "肘は肩の真下に位置させます",
                    "頭からかかとまで一直線を保ちます",
                    "お腹に力を入れ、腰が反らないよう注意します",
                    "30秒から1分間キープしましょう",
                    "毎日2-3セット実施してください",
                ],
                "/images/sit.PNG",
            ),
            entry(
                "サイドプランク",
                "体幹の側面を強化し、姿勢の改善と腰痛予防に効果的です。",
                &[
                    "横向きに寝て、肘で体を支えます",
                    "体を一直線に保ちます",
                    "腰が下がらないよう注意します",
                    "15-30秒間キープします",
                    "左右交互に実施し、毎日2セット行います",
                ],
                "/images/sit.PNG",
            ),
            entry(
                "バードドッグ",
                "体幹の安定性と協調性を向上させる効果的な運動です。",
                &[
                    "四つん這いの姿勢を取ります",
                    "右手と左足を同時に伸ばします",
                    "5秒間キープした後、元の姿勢に戻ります",
                    "左手と右足で同様に行います",
                    "左右各10回を2セット実施しましょう",
                ],
                "/images/sit.PNG",
            ),
        ]
    });
    &GROUP
}

/// 柔軟性向上エクササイズ
pub fn flexibility_drills() -> &'static [Exercise] {
    static GROUP: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
        vec![
            entry(
                "体幹回旋運動",
                "腰の柔軟性を向上させ、日常動作での腰痛を予防します。",
                &[
                    "椅子に座り、背筋を伸ばします",
                    "両手を胸の前で組みます",
                    "息を吐きながら、ゆっくりと体を右に回旋させます",
                    "5秒間キープした後、ゆっくりと正面に戻します",
                    "同様に左側も実施します",
                    "左右各10回を2-3セット実施しましょう",
                ],
                "/images/sit.PNG",
            ),
            entry(
                "ハムストリングストレッチ",
                "太もも裏の柔軟性を向上させ、腰痛予防と歩行改善に効果的です。",
                &[
                    "椅子に座り、片足を前に伸ばします",
                    "つま先を天井に向けます",
                    "背筋を伸ばしたまま、体を前に倒します",
                    "太もも裏が伸びているのを感じます",
                    "30秒間キープします",
                    "左右交互に実施し、毎日2セット行います",
                ],
                "/images/sit.PNG",
            ),
            entry(
                "股関節ストレッチ",
                "股関節の柔軟性を向上させ、歩行とバランス能力を改善します。",
                &[
                    "椅子に座り、片足の足首をもう一方の膝の上に置きます",
                    "背筋を伸ばしたまま、ゆっくりと体を前に倒します",
                    "股関節が伸びているのを感じます",
                    "30秒間キープします",
                    "左右交互に実施し、毎日2セット行います",
                ],
                "/images/sit.PNG",
            ),
        ]
    });
    &GROUP
}
