use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Formata no padrão pt-BR: ponto de milhar, vírgula decimal.
fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize).replace('.', ",")
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize).replace('.', ",")
        }
        ValueFormat::Integer => format_thousands(val as i64),
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Card de indicador do dashboard.
#[component]
pub fn StatCard(
    /// Rótulo acima do valor
    label: String,
    /// Nome do ícone do helper icon()
    icon_name: String,
    /// Valor principal (None = carregando/indisponível)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Formatação do valor
    format: ValueFormat,
    /// Status visual
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    /// Texto secundário abaixo do valor
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let format_clone = format.clone();

    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format_clone),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(1500), "1.500");
        assert_eq!(format_thousands(1234567), "1.234.567");
        assert_eq!(format_thousands(-2500), "-2.500");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(24.5, &ValueFormat::Percent { decimals: 1 }),
            "24,5%"
        );
        assert_eq!(format_value(500.0, &ValueFormat::Integer), "500");
        assert_eq!(
            format_value(3.75, &ValueFormat::Number { decimals: 2 }),
            "3,75"
        );
    }
}
