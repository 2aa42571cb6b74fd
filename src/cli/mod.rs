use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;

use crate::application::LedgerService;
use crate::domain::{BASE_CURRENCY_LABEL, MAX_OPERATIONS, MIN_OPERATIONS, format_amount};

/// Dispendio - interactive console expense tracker
#[derive(Parser)]
#[command(name = "dispendio")]
#[command(about = "An interactive console expense tracker for session-only bookkeeping")]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut shell = Shell::new(stdin.lock(), stdout.lock());
        shell.run()
    }
}

/// One main-menu action, dispatched on a single discrete selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    List,
    Statistics,
    Sort,
    Convert,
    Search,
    Exit,
}

impl MenuAction {
    fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "1" => Some(MenuAction::List),
            "2" => Some(MenuAction::Statistics),
            "3" => Some(MenuAction::Sort),
            "4" => Some(MenuAction::Convert),
            "5" => Some(MenuAction::Search),
            "0" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// One conversion-submenu choice: three fixed fiat labels plus a custom
/// rate. The rate itself is always read from the user, never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CurrencyChoice {
    Usd,
    Eur,
    Gbp,
    Custom,
}

impl CurrencyChoice {
    fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "1" => Some(CurrencyChoice::Usd),
            "2" => Some(CurrencyChoice::Eur),
            "3" => Some(CurrencyChoice::Gbp),
            "4" => Some(CurrencyChoice::Custom),
            _ => None,
        }
    }

    /// Label rendered next to converted amounts.
    fn label(self) -> &'static str {
        match self {
            CurrencyChoice::Usd => "USD",
            CurrencyChoice::Eur => "EUR",
            CurrencyChoice::Gbp => "GBP",
            CurrencyChoice::Custom => "иностранной валюты",
        }
    }

    /// Prompt asking for the exchange rate in base units per 1 foreign unit.
    fn rate_prompt(self) -> &'static str {
        match self {
            CurrencyChoice::Usd => "Введите курс рубля к долларов: ",
            CurrencyChoice::Eur => "Введите курс рубля к евро: ",
            CurrencyChoice::Gbp => "Введите курс рубля к фунтов: ",
            CurrencyChoice::Custom => {
                "Введите произвольный курс (рублей за 1 единицу валюты): "
            }
        }
    }
}

/// Blocking, single-threaded interactive shell over the ledger service:
/// `CollectingCount -> CollectingEntries -> MenuLoop -> Exit`.
///
/// Generic over its streams so the whole state machine can be driven by
/// scripted input in tests.
pub struct Shell<R, W> {
    input: R,
    output: W,
    service: LedgerService,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            service: LedgerService::new(),
        }
    }

    /// Run the whole session: collect the operation count, ingest exactly
    /// that many expenses, then serve the menu until the exit selector.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== УЧЕТ РАСХОДОВ ===")?;
        let count = self.collect_count()?;
        self.collect_entries(count)?;
        self.menu_loop()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            bail!("input stream closed before the session ended");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn collect_count(&mut self) -> Result<usize> {
        loop {
            let input = self.prompt(&format!(
                "Введите количество операций ({MIN_OPERATIONS}-{MAX_OPERATIONS}): "
            ))?;
            match LedgerService::parse_operations_count(&input) {
                Ok(count) => return Ok(count),
                Err(_) => writeln!(
                    self.output,
                    "Ошибка! Введите число от {MIN_OPERATIONS} до {MAX_OPERATIONS}."
                )?,
            }
        }
    }

    fn collect_entries(&mut self, count: usize) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Введите траты в формате: Название; Сумма")?;
        writeln!(self.output, "Пример: Влажные салфетки \"Лента\"; 235")?;

        for index in 1..=count {
            loop {
                let line = self.prompt(&format!("Операция {index}: "))?;
                match self.service.add_expense(&line) {
                    Ok(()) => break,
                    Err(_) => {
                        writeln!(self.output, "Ошибка формата! Используйте: Название; Сумма")?;
                    }
                }
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "Все операции успешно добавлены!")?;
        Ok(())
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== ГЛАВНОЕ МЕНЮ ===")?;
            writeln!(self.output, "1. Вывод данных")?;
            writeln!(
                self.output,
                "2. Статистика (среднее, максимальное, минимальное, сумма)"
            )?;
            writeln!(
                self.output,
                "3. Сортировка по цене (пузырьковая сортировка)"
            )?;
            writeln!(self.output, "4. Конвертация валюты")?;
            writeln!(self.output, "5. Поиск по названию")?;
            writeln!(self.output, "0. Выход")?;

            let selector = self.prompt("Выберите пункт меню: ")?;
            match MenuAction::from_selector(&selector) {
                Some(MenuAction::List) => self.show_entries()?,
                Some(MenuAction::Statistics) => self.show_statistics()?,
                Some(MenuAction::Sort) => self.sort_by_price()?,
                Some(MenuAction::Convert) => self.convert_currency()?,
                Some(MenuAction::Search) => self.search_by_name()?,
                Some(MenuAction::Exit) => {
                    writeln!(self.output, "До свидания!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Неверный выбор!")?,
            }
        }
    }

    fn show_entries(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== ВСЕ ТРАТЫ ===")?;
        if self.service.is_empty() {
            writeln!(self.output, "Нет данных о тратах.")?;
            return Ok(());
        }

        for (index, expense) in self.service.entries().iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, expense)?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "Всего операций: {}", self.service.count())?;
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<()> {
        let stats = match self.service.statistics() {
            Ok(stats) => stats,
            Err(_) => {
                writeln!(self.output, "Нет данных для статистики.")?;
                return Ok(());
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "=== СТАТИСТИКА ===")?;
        writeln!(
            self.output,
            "Общая сумма: {} {}",
            format_amount(stats.total),
            BASE_CURRENCY_LABEL
        )?;
        writeln!(
            self.output,
            "Средняя трата: {} {}",
            format_amount(stats.average),
            BASE_CURRENCY_LABEL
        )?;
        writeln!(
            self.output,
            "Максимальная трата: {} {}",
            format_amount(stats.max),
            BASE_CURRENCY_LABEL
        )?;
        writeln!(
            self.output,
            "Минимальная трата: {} {}",
            format_amount(stats.min),
            BASE_CURRENCY_LABEL
        )?;
        writeln!(self.output, "Количество операций: {}", stats.count)?;
        Ok(())
    }

    /// Two-phase sort: preview the sorted copy, then commit it only on an
    /// explicit affirmative answer.
    fn sort_by_price(&mut self) -> Result<()> {
        let preview = match self.service.sorted_preview() {
            Ok(preview) => preview,
            Err(_) => {
                writeln!(self.output, "Нет данных для сортировки.")?;
                return Ok(());
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "=== СОРТИРОВКА ПО ЦЕНЕ (ПО ВОЗРАСТАНИЮ) ===")?;
        for (index, expense) in preview.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, expense)?;
        }

        writeln!(self.output)?;
        let answer = self.prompt("Применить сортировку к основному списку? (y/n): ")?;
        if answer.trim().eq_ignore_ascii_case("y") {
            self.service.apply_order(preview);
            writeln!(self.output, "Сортировка применена!")?;
        }
        Ok(())
    }

    fn convert_currency(&mut self) -> Result<()> {
        if self.service.is_empty() {
            writeln!(self.output, "Нет данных для конвертации.")?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "=== КОНВЕРТАЦИЯ ВАЛЮТЫ ===")?;
        writeln!(self.output, "Доступные валюты:")?;
        writeln!(self.output, "1. Доллар США (USD)")?;
        writeln!(self.output, "2. Евро (EUR)")?;
        writeln!(self.output, "3. Фунт стерлингов (GBP)")?;
        writeln!(self.output, "4. Произвольный курс")?;

        let selector = self.prompt("Выберите валюту или введите 0 для отмены: ")?;
        if selector.trim() == "0" {
            return Ok(());
        }
        let choice = match CurrencyChoice::from_selector(selector.trim()) {
            Some(choice) => choice,
            None => {
                writeln!(self.output, "Неверный выбор!")?;
                return Ok(());
            }
        };

        let rate_input = self.prompt(choice.rate_prompt())?;
        let rate = match LedgerService::parse_rate(&rate_input) {
            Ok(rate) => rate,
            Err(_) => {
                writeln!(self.output, "Неверный курс!")?;
                return Ok(());
            }
        };

        let conversions = match self.service.converted(rate) {
            Ok(conversions) => conversions,
            Err(_) => {
                writeln!(self.output, "Неверный курс!")?;
                return Ok(());
            }
        };

        writeln!(self.output)?;
        writeln!(
            self.output,
            "=== ТРАТЫ В {} (курс: {}) ===",
            choice.label(),
            format_amount(rate)
        )?;
        for conversion in &conversions {
            writeln!(
                self.output,
                "{}; {} {}",
                conversion.expense.name(),
                format_amount(conversion.converted),
                choice.label()
            )?;
        }
        Ok(())
    }

    fn search_by_name(&mut self) -> Result<()> {
        if self.service.is_empty() {
            writeln!(self.output, "Нет данных для поиска.")?;
            return Ok(());
        }

        writeln!(self.output)?;
        let term = self.prompt("Введите название для поиска: ")?;
        let term = term.trim().to_lowercase();

        let matches = match self.service.search(&term) {
            Ok(matches) => matches,
            Err(_) => {
                writeln!(self.output, "Пустой поисковый запрос!")?;
                return Ok(());
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "=== РЕЗУЛЬТАТЫ ПОИСКА: '{term}' ===")?;
        if matches.is_empty() {
            writeln!(self.output, "Ничего не найдено.")?;
            return Ok(());
        }

        for (index, expense) in matches.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, expense)?;
        }
        writeln!(self.output, "Найдено: {} операций", matches.len())?;
        Ok(())
    }
}
