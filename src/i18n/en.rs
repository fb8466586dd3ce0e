use super::*;

pub(super) static MESSAGES: Messages = Messages {
    welcome: Welcome {
        title: "🤖 Welcome to AI Chatbot!",
        description: "Hello! I am an AI chatbot powered by ChatGPT. I'm ready to help you with various questions and conversations.",
        usage: "How to use:",
        ai_mode: "• Type /ai to enable AI ChatGPT mode",
        ai_off: "• Type /ai_off to disable AI mode",
        weather: "• Ask about weather or workout for automatic info",
        help: "• Type /help to see help",
        start: "Please start the conversation by sending a message!",
    },
    help: Help {
        title: "📋 AI Chatbot Help",
        commands: "Available commands:",
        features: "Features:",
        feature_lines: [
            "• 💬 Natural conversation with AI (activation required)",
            "• 🧠 Save conversation context",
            "• 🌍 Support Indonesian and English languages",
            "• ⚡ Fast and accurate responses",
            "• 🌤️ Real-time weather information",
            "• 🏃‍♂️ Automatic workout reminders",
            "• 🤖 AI mode on/off as needed",
        ],
        tips: "Tips:",
        ai_activation: "• Enable AI mode with /ai to chat with ChatGPT",
        weather_auto: "• Ask about 'weather' or 'workout' for automatic info",
        reminders: "• Workout reminders run automatically every Saturday",
        start_message: "Start conversation by sending any message!",
    },
    commands: CommandList {
        start: "• /start - Start conversation",
        help: "• /help - Show this help",
        clear: "• /clear - Clear conversation history",
        ai: "• /ai - Enable AI ChatGPT mode",
        ai_off: "• /ai_off - Disable AI ChatGPT mode",
        weather: "• /weather - Check current weather",
        workout: "• /workout - Check weather for workout",
        reminder: "• /reminder - Enable the Saturday workout reminder",
        stop_reminder: "• /stop_reminder - Stop the workout reminder",
    },
    replies: Replies {
        history_cleared: "🗑️ Conversation history has been cleared. Please start a new conversation!",
        ai_mode_enabled: "🤖 AI ChatGPT mode enabled!\n\nNow all your messages will be processed by ChatGPT. Type /ai_off to disable.",
        ai_mode_disabled: "🚫 AI ChatGPT mode disabled!\n\nNow the bot will only respond to specific commands and weather/workout queries.",
        weather_unavailable: "❌ Weather service is not available. Weather API key is not configured.",
        weather_error: "❌ Sorry, couldn't get weather data right now. Please try again later.",
        workout_error: "❌ Sorry, couldn't check weather for workout right now. Please try again later.",
        reminder_enabled: "🏃‍♂️ *Workout Reminder Enabled!*",
        reminder_already_active: "✅ Workout reminder is already active! You will get reminders every Saturday.",
        reminder_stopped: "🛑 Workout reminder has been stopped.",
        reminder_not_active: "⚠️ Workout reminder is not currently active.",
        reminder_error: "❌ Failed to set up reminder. Please try again later.",
        quota_exceeded: "⚠️ *OpenAI quota exceeded*\n\nSorry, OpenAI usage quota has been exhausted for this month. Please try again next month or contact administrator.",
        connection_error: "⚠️ Connection to ChatGPT is having issues. Please try again in a moment.",
        general_error: "❌ Sorry, an error occurred while processing the message. Please try again.",
        unknown_command: "❓ Command not recognized. Type /help to see available commands.",
        ai_default_response: "Sorry, I can't process your request right now. Please try again later.",
    },
    ai_off_hints: [
        "🤖 Hello! I'm an AI chatbot. Enable AI mode with /ai to chat with ChatGPT.",
        "💡 Tip: Type /ai to enable ChatGPT mode, or ask about weather/workout for automatic info.",
        "📝 Your message received! Use /ai for AI chat or /help for assistance.",
        "🔔 AI mode is currently off. Type /ai to enable ChatGPT or /weather to check weather.",
    ],
    persona_prompt: "You are a friendly and helpful AI assistant. Answer questions in natural, informative English.",
    weather: WeatherLabels {
        current_weather: "Current Weather",
        location: "📍 *Location:*",
        condition: "*Condition:*",
        temperature: "🌡️ *Temperature:*",
        feels_like: "feels like",
        humidity: "💧 *Humidity:*",
        wind_speed: "🌪️ *Wind Speed:*",
        visibility: "👁️ *Visibility:*",
        time: "🕒 *Time:*",
        data_source: "Data from",
        weather_in: "Weather in",
        good_for_workout: "🏃‍♂️ *Great Weather for Workout!*",
        not_good_for_workout: "🏠 *Weather Not Ideal for Outdoor Workout*",
        recommendations: "*Recommendations:*",
        indoor_alternatives: "*Indoor workout alternatives:*",
        use_proper_clothing: "• Use appropriate workout clothing",
        stay_hydrated: "• Don't forget to stay hydrated",
        warm_up: "• Do warm-up before exercising",
        choose_right_time: "• Choose the right time to exercise",
        home_workout: "• 🏋️‍♂️ Home workout",
        yoga: "• 🧘‍♀️ Yoga or stretching",
        dance: "• 💃 Dance workout",
        shadow_boxing: "• 🥊 Shadow boxing",
        active_games: "• 🎯 Active games at home",
        keep_spirit: "Keep up the exercise spirit! 💪",
        enjoy_workout: "Enjoy your workout! 💪🔥",
    },
    suitability: SuitabilityTexts {
        perfect: "Weather is perfect for jogging!",
        rainy: "It's raining, better to exercise indoors",
        thunderstorm: "Thunderstorm present, not safe for outdoor exercise",
        too_cold: "Weather is too cold for jogging",
        too_hot: "Weather is too hot, better to exercise in the evening",
        high_humidity: "Very high humidity, might be uncomfortable for jogging",
        strong_wind: "Wind is too strong for jogging",
    },
    reminder: ReminderTexts {
        weekend_time: "✅ You will receive workout reminders every *Saturday* at",
        location: "📍 Weather location:",
        timezone: "🕐 Timezone:",
        weather_check: "Bot will check weather first and provide appropriate workout recommendations.",
        stop_instruction: "Use /stop\\_reminder to stop reminders.",
    },
    weekly: WeeklyTexts {
        title_good: "🏃‍♂️ *Weekend Workout Reminder!*",
        title_bad: "🏠 *Weekend Workout Reminder!*",
        basic: WeeklyBasic {
            title: "🏃‍♂️ *Weekend Workout Reminder!*",
            greeting: "Hello! It's Saturday, time to exercise! 💪",
            dont_forget: "Don't forget to:",
            warm_up: "• Warm up before exercising",
            stay_hydrated: "• Stay hydrated",
            comfortable_shoes: "• Use comfortable sports shoes",
            enjoy: "Enjoy your workout! 🔥",
        },
        good: WeeklyGood {
            greeting: "Hello! It's Saturday and the weather is great for jogging!",
            tips_title: "*Tips for today's jogging:*",
            weather_clothing: "• Wear weather-appropriate clothing",
            bring_water: "• Bring a water bottle",
            warm_up_cool_down: "• Don't forget warm-up and cool-down",
            choose_route: "• Choose a safe and comfortable route",
            lets_start: "Let's start jogging! 🏃‍♂️💨",
        },
        bad: WeeklyBad {
            greeting: "Hello! It's Saturday, but the weather isn't suitable for jogging.",
            alternatives_title: "*Indoor exercise alternatives:*",
            home_workout: "• 🏋️‍♂️ Home workout (push ups, sit ups, squats)",
            yoga: "• 🧘‍♀️ Yoga or stretching",
            dance_workout: "• 💃 Dance workout with your favorite music",
            shadow_boxing: "• 🥊 Shadow boxing or martial arts",
            active_games: "• 🎯 Active games at home",
            keep_spirit: "Keep up the exercise spirit! 💪🔥",
        },
        fallback: WeeklyFallback {
            title: "🏃‍♂️ *Weekend Workout Reminder!*",
            greeting: "Hello! It's Saturday, time to exercise! 💪",
            weather_error: "Sorry, couldn't check the weather right now. But don't let that stop your exercise spirit!",
            suggestions: "*Exercise suggestions:*",
            check_weather: "• Check the weather outside first",
            sunny_activity: "• If sunny, go jogging or cycling",
            rainy_activity: "• If raining, workout at home",
            enjoy: "Enjoy your workout! 🔥",
        },
    },
};
