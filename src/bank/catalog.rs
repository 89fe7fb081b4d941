//! Static question catalog
//!
//! Questions are defined once at startup and shared read-only across
//! sessions. Keyword lists are the "expected points" of a good answer;
//! scoring checks substring presence, nothing smarter.

/// One interview question with its expected-answer model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub topic: &'static str,
    /// 1..=5, from warm-up to system design
    pub difficulty: u8,
    pub prompt: &'static str,
    /// Keywords a good answer is expected to mention
    pub expected_keywords: &'static [&'static str],
    pub reference_answer: &'static str,
}

pub static QUESTION_BANK: &[Question] = &[
    Question {
        id: "py_types_1",
        topic: "Python basics",
        difficulty: 1,
        prompt: "Расскажи про основные типы данных в Python (list/dict/set/tuple) и когда какой использовать.",
        expected_keywords: &["list", "dict", "set", "tuple", "изменяем", "неизменяем", "ключ", "уникаль"],
        reference_answer: "list — изменяемая последовательность; tuple — неизменяемая; \
             dict — отображение ключ→значение; set — множество уникальных элементов. \
             Выбор зависит от операций: индексирование, уникальность, быстрый доступ по ключу.",
    },
    Question {
        id: "py_for_1",
        topic: "Python basics",
        difficulty: 1,
        prompt: "Как работает цикл for в Python и что такое итератор/итерируемый объект?",
        expected_keywords: &["for", "iter", "iterator", "iterable", "__iter__", "__next__", "StopIteration"],
        reference_answer: "for итерируется по iterable: вызывает iter(obj) чтобы получить iterator, \
             затем repeatedly вызывает next() до StopIteration. \
             Iterable реализует __iter__, iterator — __next__.",
    },
    Question {
        id: "py_exceptions_2",
        topic: "Python exceptions",
        difficulty: 2,
        prompt: "Объясни try/except/else/finally. Когда выполняется else и зачем finally?",
        expected_keywords: &["try", "except", "else", "finally", "без исключений", "всегда"],
        reference_answer: "else выполняется, если в try не было исключений. \
             finally выполняется всегда (даже при исключении/return) — для освобождения ресурсов.",
    },
    Question {
        id: "sql_join_1",
        topic: "SQL",
        difficulty: 1,
        prompt: "В чем разница между INNER JOIN и LEFT JOIN? Приведи пример, когда нужен LEFT JOIN.",
        expected_keywords: &["inner", "left", "null", "все строки", "совпад"],
        reference_answer: "INNER JOIN возвращает только совпавшие строки. \
             LEFT JOIN возвращает все строки из левой таблицы + совпадения справа (иначе NULL). \
             Например: показать всех пользователей и их заказы, включая пользователей без заказов.",
    },
    Question {
        id: "sql_index_3",
        topic: "SQL",
        difficulty: 3,
        prompt: "Что такое индекс в БД и какие у него плюсы/минусы? Когда индекс может навредить?",
        expected_keywords: &["индекс", "ускор", "поиск", "b-tree", "запись", "обнов", "место", "селектив"],
        reference_answer: "Индекс (часто B-tree) ускоряет поиск/сортировку/джойны по ключам, \
             но занимает место и замедляет INSERT/UPDATE/DELETE из-за обслуживания. \
             Может навредить при низкой селективности, частых обновлениях или неверном выборе индекса.",
    },
    Question {
        id: "http_methods_1",
        topic: "HTTP",
        difficulty: 1,
        prompt: "Какие HTTP методы знаешь? Чем отличаются POST и PUT? Что такое идемпотентность?",
        expected_keywords: &["get", "post", "put", "delete", "patch", "идемпотент", "повтор"],
        reference_answer: "GET/POST/PUT/DELETE/PATCH. PUT обычно идемпотентен: повтор запроса приводит к тому же состоянию ресурса. \
             POST чаще не идемпотентен. Идемпотентность — повторяемость без изменения результата.",
    },
    Question {
        id: "django_orm_2",
        topic: "Django",
        difficulty: 2,
        prompt: "Как Django ORM строит запросы и что такое QuerySet? Когда запрос реально выполняется?",
        expected_keywords: &["QuerySet", "lazy", "ленив", "eval", "sql", "filter", "select_related", "prefetch_related"],
        reference_answer: "QuerySet — ленивое описание запроса; SQL строится при вызовах filter/annotate \
             и выполняется при итерации/len/list/exists и т.п. \
             select_related/prefetch_related помогают с проблемой N+1.",
    },
    Question {
        id: "testing_2",
        topic: "Testing",
        difficulty: 2,
        prompt: "Чем отличаются unit и integration тесты? Как бы ты тестировал(а) API эндпоинт?",
        expected_keywords: &["unit", "integration", "mock", "контракт", "http", "fixtures"],
        reference_answer: "Unit — изолированная проверка маленькой части (часто с моками). \
             Integration — проверка взаимодействия компонентов (БД/HTTP). \
             API эндпоинт: статус-коды, body, авторизация, негативные кейсы; интеграционно с тестовой БД/fixtures.",
    },
    Question {
        id: "design_4",
        topic: "System design",
        difficulty: 4,
        prompt: "Как бы ты спроектировал(а) сервис сокращения ссылок (URL shortener)? Какие компоненты нужны?",
        expected_keywords: &["id", "hash", "db", "cache", "rate", "redirect", "unique", "scale"],
        reference_answer: "Компоненты: API для создания/редиректа, генерация уникального ключа (ID/хэш), \
             БД соответствий, кэш для популярных ссылок, rate limiting, аналитика. \
             Для масштабирования — шардирование/репликация, CDN для редиректов.",
    },
];

/// Look up a question by id
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTION_BANK.iter().find(|q| q.id == id)
}
