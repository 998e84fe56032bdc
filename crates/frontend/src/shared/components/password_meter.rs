use leptos::prelude::*;

/// Força estimada de uma senha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Fraca,
    Media,
    Forte,
}

impl PasswordStrength {
    pub fn display_name(&self) -> &'static str {
        match self {
            PasswordStrength::Fraca => "Fraca",
            PasswordStrength::Media => "Média",
            PasswordStrength::Forte => "Forte",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PasswordStrength::Fraca => "password-meter__bar password-meter__bar--weak",
            PasswordStrength::Media => "password-meter__bar password-meter__bar--medium",
            PasswordStrength::Forte => "password-meter__bar password-meter__bar--strong",
        }
    }

    /// Fração preenchida da barra (0.0 a 1.0).
    fn fill(&self) -> f64 {
        match self {
            PasswordStrength::Fraca => 0.33,
            PasswordStrength::Media => 0.66,
            PasswordStrength::Forte => 1.0,
        }
    }
}

/// Pontua a senha: um ponto por critério atendido.
///
/// Critérios: 8+ caracteres, 12+ caracteres, minúscula e maiúscula,
/// dígito, símbolo.
pub fn score_password(password: &str) -> u8 {
    let mut score = 0u8;

    if password.len() >= 8 {
        score += 1;
    }
    if password.len() >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Converte a pontuação em faixa de força.
pub fn strength_of(password: &str) -> PasswordStrength {
    match score_password(password) {
        0..=2 => PasswordStrength::Fraca,
        3..=4 => PasswordStrength::Media,
        _ => PasswordStrength::Forte,
    }
}

/// Barra de força de senha, reativa ao campo.
#[component]
pub fn PasswordMeter(
    #[prop(into)]
    password: Signal<String>,
) -> impl IntoView {
    let strength = Memo::new(move |_| strength_of(&password.get()));

    view! {
        <div class="password-meter">
            <div class="password-meter__track">
                <div
                    class=move || strength.get().class()
                    style=move || format!("width: {}%", (strength.get().fill() * 100.0) as u32)
                ></div>
            </div>
            <span class="password-meter__label">
                {move || {
                    if password.get().is_empty() {
                        String::new()
                    } else {
                        strength.get().display_name().to_string()
                    }
                }}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pontuacao_por_criterio() {
        assert_eq!(score_password(""), 0);
        assert_eq!(score_password("abc"), 0);
        assert_eq!(score_password("abcdefgh"), 1); // só comprimento 8
        assert_eq!(score_password("Abcdefgh"), 2); // + caixa mista
        assert_eq!(score_password("Abcdefg1"), 3); // + dígito
        assert_eq!(score_password("Abcdef1!"), 4); // + símbolo
        assert_eq!(score_password("Abcdefgh1234!"), 5); // + comprimento 12
    }

    #[test]
    fn faixas_de_forca() {
        assert_eq!(strength_of("curta"), PasswordStrength::Fraca);
        assert_eq!(strength_of("Abcdefg1"), PasswordStrength::Media);
        assert_eq!(strength_of("Abcdefgh1234!"), PasswordStrength::Forte);
    }
}
