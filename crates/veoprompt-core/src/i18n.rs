//! Localization tables.
//!
//! Static label and error text for the two supported languages, plus the two
//! non-binding option lists (suggested genres and camera types). Option lists
//! are autocomplete hints only; validation never rejects a value absent from
//! them.

use veoprompt_models::{AudioField, CameraField, CharacterField, FieldPath, Language, SceneField};

/// User-facing strings for one language.
pub struct Translations {
    pub title: &'static str,
    pub description: &'static str,
    pub describe_scene: &'static str,
    pub generate_prompt: &'static str,
    pub regenerate_prompt: &'static str,
    pub generating_prompt: &'static str,
    pub clear_prompt: &'static str,
    pub replace_with_ai: &'static str,
    pub overall_situation: &'static str,
    pub location: &'static str,
    pub elements: &'static str,
    pub genre: &'static str,
    pub look_and_feel: &'static str,
    pub color_palette: &'static str,
    pub lighting: &'static str,
    pub character_name: &'static str,
    pub appearance: &'static str,
    pub action: &'static str,
    pub camera_type: &'static str,
    pub camera_description: &'static str,
    pub music: &'static str,
    pub sfx: &'static str,
    pub dialogue_speaker: &'static str,
    pub dialogue_line: &'static str,
    pub copy_json: &'static str,
    pub result_placeholder: &'static str,
    pub error_generic: &'static str,
    pub error_not_initialized: &'static str,
}

/// Non-binding suggestion lists for semi-constrained fields.
pub struct SuggestionOptions {
    pub genres: &'static [&'static str],
    pub camera_types: &'static [&'static str],
}

static EN: Translations = Translations {
    title: "VEO Prompt Studio",
    description: "Automatically design sophisticated JSON-based prompts",
    describe_scene: "Describe the video scene you want to create...",
    generate_prompt: "Generate Prompt",
    regenerate_prompt: "Regenerate Prompt",
    generating_prompt: "Generating Prompt...",
    clear_prompt: "Clear Prompt",
    replace_with_ai: "Replace with AI suggestion",
    overall_situation: "Overall Situation",
    location: "Location",
    elements: "Elements",
    genre: "Style",
    look_and_feel: "Look & Feel",
    color_palette: "Color Palette",
    lighting: "Lighting",
    character_name: "Character Name",
    appearance: "Appearance",
    action: "Action",
    camera_type: "Type",
    camera_description: "Description",
    music: "Music",
    sfx: "Sound Effects (SFX)",
    dialogue_speaker: "Speaker",
    dialogue_line: "Line",
    copy_json: "Copy JSON",
    result_placeholder: "Your generated prompt will appear here in real-time",
    error_generic: "Failed to generate prompt. Please adjust your input or try again later.",
    error_not_initialized: "AI not initialized. Please set your API key.",
};

static KO: Translations = Translations {
    title: "VEO Prompt Studio",
    description: "정교한 JSON 기반 프롬프트를 자동 설계",
    describe_scene: "만들고 싶은 영상 장면을 설명해주세요...",
    generate_prompt: "프롬프트 생성",
    regenerate_prompt: "프롬프트 다시 생성",
    generating_prompt: "프롬프트 생성 중...",
    clear_prompt: "프롬프트 지우기",
    replace_with_ai: "AI 추천으로 교체",
    overall_situation: "전체 상황",
    location: "장소",
    elements: "구성 요소",
    genre: "스타일",
    look_and_feel: "룩앤필",
    color_palette: "색상 팔레트",
    lighting: "조명",
    character_name: "캐릭터 이름",
    appearance: "외형",
    action: "행동",
    camera_type: "유형",
    camera_description: "설명",
    music: "음악",
    sfx: "음향 효과 (SFX)",
    dialogue_speaker: "화자",
    dialogue_line: "대사",
    copy_json: "JSON 복사",
    result_placeholder: "생성된 프롬프트가 여기에 실시간으로 표시됩니다",
    error_generic: "프롬프트를 생성하지 못했습니다. 입력 내용을 수정하거나 나중에 다시 시도하십시오.",
    error_not_initialized: "AI가 초기화되지 않았습니다. API 키를 설정해주세요.",
};

static EN_OPTIONS: SuggestionOptions = SuggestionOptions {
    genres: &[
        "Noir",
        "Cyberpunk",
        "Cartoon",
        "Anime",
        "Documentary Style",
        "Vintage Film",
        "Cinematic Vlog",
        "Hyper-realistic CGI",
        "Minimalist",
    ],
    camera_types: &[
        "Static Shot",
        "Panning Shot",
        "Tilting Shot",
        "Dolly Shot",
        "Trucking Shot",
        "Tracking Shot",
        "Crane Shot",
        "Handheld Shot",
        "Zoom",
        "Dolly Zoom",
        "Dutch Angle",
        "Point of View (POV) Shot",
        "Extreme Close Up",
        "Close Up",
        "Medium Shot",
        "Long Shot",
        "Establishing Shot",
    ],
};

static KO_OPTIONS: SuggestionOptions = SuggestionOptions {
    genres: &[
        "느와르",
        "사이버펑크",
        "카툰 스타일",
        "애니메이션",
        "다큐멘터리 스타일",
        "빈티지 필름",
        "시네마틱 브이로그",
        "초현실적 CGI",
        "미니멀리스트",
    ],
    camera_types: &[
        "고정 샷",
        "패닝 샷",
        "틸팅 샷",
        "달리 샷",
        "트래킹 샷",
        "추적 샷",
        "크레인 샷",
        "핸드헬드 샷",
        "줌",
        "달리 줌",
        "더치 앵글",
        "1인칭 시점 (POV) 샷",
        "익스트림 클로즈업",
        "클로즈업",
        "미디엄 샷",
        "롱 샷",
        "확립 샷",
    ],
};

/// Translation table for a language.
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Ko => &KO,
    }
}

/// Suggestion option lists for a language.
pub fn options(language: Language) -> &'static SuggestionOptions {
    match language {
        Language::En => &EN_OPTIONS,
        Language::Ko => &KO_OPTIONS,
    }
}

/// Localized label for the field at `path`, as passed to suggestion requests.
pub fn field_label(path: FieldPath, language: Language) -> &'static str {
    let t = translations(language);
    match path {
        FieldPath::Scene(field) => match field {
            SceneField::OverallSituation => t.overall_situation,
            SceneField::Location => t.location,
            SceneField::Element(_) => t.elements,
            SceneField::Genre => t.genre,
            SceneField::LookAndFeel => t.look_and_feel,
            SceneField::ColorPalette => t.color_palette,
            SceneField::Lighting => t.lighting,
        },
        FieldPath::Character(_, field) => match field {
            CharacterField::Name => t.character_name,
            CharacterField::Appearance => t.appearance,
            CharacterField::Action => t.action,
        },
        FieldPath::Camera(field) => match field {
            CameraField::Kind => t.camera_type,
            CameraField::Description => t.camera_description,
        },
        FieldPath::Audio(field) => match field {
            AudioField::Music => t.music,
            AudioField::Sfx(_) => t.sfx,
            AudioField::DialogueSpeaker => t.dialogue_speaker,
            AudioField::DialogueLine => t.dialogue_line,
        },
    }
}
