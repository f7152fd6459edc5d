//! Localized directive text for generation requests.

use veoprompt_models::Language;

const DOCUMENT_DIRECTIVE_EN: &str = "You are a creative video director. A user will provide a concept for a video scene. Your task is to transform this concept into a detailed, structured VEO prompt JSON object.
Creatively fill in detailed cinematic properties for scene settings, characters, camera, and audio.
The output must be a single JSON object that strictly adheres to the provided schema.";

const DOCUMENT_DIRECTIVE_KO: &str = "당신은 창의적인 비디오 감독입니다. 사용자가 비디오 장면에 대한 컨셉을 제공할 것입니다. 당신의 임무는 이 컨셉을 VEO를 위한 상세하고 구조화된 JSON 프롬프트 객체로 변환하는 것입니다.
장면 설정, 캐릭터, 카메라, 오디오에 대한 상세한 영화적 속성을 창의적으로 채워 넣으십시오.
출력은 제공된 스키마를 엄격히 준수하는 단일 JSON 객체여야 합니다.";

const KO_VALUES_INSTRUCTION: &str = "모든 텍스트 값은 한국어로 작성되어야 합니다.";

/// Build the full-document generation directive around the user's concept.
pub fn document_directive(description: &str, language: Language) -> String {
    let (main, instructions) = match language {
        Language::En => (DOCUMENT_DIRECTIVE_EN, ""),
        Language::Ko => (DOCUMENT_DIRECTIVE_KO, KO_VALUES_INSTRUCTION),
    };
    let mut directive = format!("{}\n\nUSER CONCEPT: \"{}\"", main, description);
    if !instructions.is_empty() {
        directive.push_str("\n\n");
        directive.push_str(instructions);
    }
    directive
}

/// Build the single-field replacement directive.
pub fn suggestion_directive(
    field_label: &str,
    current_value: &str,
    context: &str,
    language: Language,
) -> String {
    let lang_instruction = match language {
        Language::En => "The suggestion must be in English.",
        Language::Ko => "The suggestion must be in Korean.",
    };
    format!(
        "Based on the overall video concept, provide a creative suggestion to replace the current value for a specific field.\n\n\
         Overall Concept: \"{}\"\n\n\
         Field to improve: \"{}\"\n\
         Current value: \"{}\"\n\n\
         Provide only the new suggested text, without any labels or extra formatting.\n\
         {}",
        context, field_label, current_value, lang_instruction
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_directive_embeds_concept() {
        let directive = document_directive("a fox in the rain", Language::En);
        assert!(directive.contains("USER CONCEPT: \"a fox in the rain\""));
        assert!(!directive.contains(KO_VALUES_INSTRUCTION));
    }

    #[test]
    fn test_korean_directive_requests_korean_values() {
        let directive = document_directive("여우", Language::Ko);
        assert!(directive.contains(KO_VALUES_INSTRUCTION));
    }

    #[test]
    fn test_suggestion_directive_fields() {
        let directive =
            suggestion_directive("Lighting", "dim", "noir chase scene", Language::Ko);
        assert!(directive.contains("Field to improve: \"Lighting\""));
        assert!(directive.contains("Current value: \"dim\""));
        assert!(directive.contains("Overall Concept: \"noir chase scene\""));
        assert!(directive.contains("must be in Korean"));
    }
}
